//! Shared utilities for readiness testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

/// Bind a listener that accepts and immediately drops connections.
pub async fn start_accepting(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => drop(socket),
                Err(_) => break,
            }
        }
    });
}

/// Bind `addr` only after `delay`, then accept connections.
pub fn bind_after(addr: SocketAddr, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let listener = TcpListener::bind(addr).await.unwrap();
        loop {
            match listener.accept().await {
                Ok((socket, _)) => drop(socket),
                Err(_) => break,
            }
        }
    });
}
