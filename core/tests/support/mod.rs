#![allow(dead_code)]

//! Shared setup for the scenario tests: starts a mock backend on a random
//! port inside a background thread and hands back its base URL.

pub fn spawn(app: axum::Router) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, app).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

pub fn spawn_catalog() -> String {
    spawn(mock_server::catalog::app())
}

pub fn spawn_booking() -> String {
    spawn(mock_server::booking::app())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
