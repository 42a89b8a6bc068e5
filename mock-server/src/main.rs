use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let catalog_port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let booking_port = std::env::var("BOOKING_PORT").unwrap_or_else(|_| "3001".to_string());

    let catalog_addr = format!("127.0.0.1:{catalog_port}");
    let booking_addr = format!("127.0.0.1:{booking_port}");
    let catalog_listener = TcpListener::bind(&catalog_addr).await?;
    let booking_listener = TcpListener::bind(&booking_addr).await?;
    println!("catalog listening on {catalog_addr}");
    println!("booking listening on {booking_addr}");

    tokio::try_join!(
        mock_server::run(catalog_listener, mock_server::catalog::app()),
        mock_server::run(booking_listener, mock_server::booking::app()),
    )?;
    Ok(())
}
