use std::io;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Byte-oriented control channel for the rotor server.
///
/// One TCP listener, at most one client at a time; a new connection is only
/// accepted once the current client goes away. Per-client failures are
/// absorbed here by dropping the connection, so nothing downstream of the
/// transport ever sees them.
pub struct Transport {
    listener: TcpListener,
    client: Option<TcpStream>,
}

impl Transport {
    pub async fn bind(addr: SocketAddr) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        println!("Listening on {}", listener.local_addr()?);
        Ok(Transport {
            listener,
            client: None,
        })
    }

    /// Wait for the next control byte, accepting a client first if none is
    /// connected. EOF or a read error drops the client and goes back to
    /// accepting. Only a failure of the listener itself is returned.
    pub async fn next_byte(&mut self) -> io::Result<u8> {
        loop {
            match self.client.as_mut() {
                None => {
                    let (stream, peer) = self.listener.accept().await?;
                    println!("Client connected: {}", peer);
                    self.client = Some(stream);
                }
                Some(stream) => {
                    let mut buf = [0u8; 1];
                    match stream.read(&mut buf).await {
                        Ok(0) => {
                            println!("Client disconnected");
                            self.client = None;
                        }
                        Ok(_) => return Ok(buf[0]),
                        Err(e) => {
                            println!("Client read failed: {}", e);
                            self.client = None;
                        }
                    }
                }
            }
        }
    }

    /// Push a telemetry frame to the connected client, if any. A failed
    /// write drops the client; telemetry is best-effort by design.
    pub async fn send_telemetry(&mut self, frame: &[u8]) {
        if let Some(stream) = self.client.as_mut() {
            if let Err(e) = stream.write_all(frame).await {
                println!("Telemetry write failed, dropping client: {}", e);
                self.client = None;
            }
        }
    }
}
