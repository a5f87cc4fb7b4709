use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::{timeout, Instant};
use tracing::{debug, info, trace, warn};

use crate::formatter::{filter_command, login_line};
use crate::ClientError;

/// Connection settings of an APRS-IS session with a range filter.
#[derive(Debug, Clone)]
pub struct AprsClientConfig {
    /// APRS server hostname
    pub server: String,
    /// APRS server port
    pub port: u16,
    /// Callsign to log in with; the passcode is derived from it
    pub callsign: String,
    pub app_name: String,
    pub app_version: String,
    /// Center of the range filter, degrees
    pub latitude: f64,
    /// Center of the range filter, degrees
    pub longitude: f64,
    pub radius_km: u32,
    /// Give up when the server sends nothing for this long
    pub read_timeout: Duration,
    pub keepalive_interval: Duration,
}

impl Default for AprsClientConfig {
    fn default() -> Self {
        Self {
            server: "aprs.glidernet.org".to_string(),
            port: 14580,
            callsign: "N0CALL".to_string(),
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            latitude: 0.0,
            longitude: 0.0,
            radius_km: 50,
            read_timeout: Duration::from_secs(300),
            keepalive_interval: Duration::from_secs(20),
        }
    }
}

/// A logged-in APRS-IS connection that yields the received lines one by one.
pub struct AprsClient {
    config: AprsClientConfig,
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    buffer: Vec<u8>,
    line: String,
    last_keepalive: Instant,
}

impl AprsClient {
    /// Connects to the configured server and sends the login line.
    pub async fn connect(config: AprsClientConfig) -> Result<Self, ClientError> {
        info!("Connecting to APRS server at {}:{}", config.server, config.port);
        let stream = TcpStream::connect((config.server.as_str(), config.port)).await?;
        info!("Connected to APRS server at {}", stream.peer_addr()?);

        let (reader, writer) = stream.into_split();
        let mut client = Self {
            config,
            reader: BufReader::new(reader),
            writer,
            buffer: Vec::new(),
            line: String::new(),
            last_keepalive: Instant::now(),
        };

        let login = login_line(
            &client.config.callsign,
            client.config.latitude,
            client.config.longitude,
            client.config.radius_km,
            &client.config.app_name,
            &client.config.app_version,
        );
        info!("Sending login command: {}", login.trim());
        client.send(&login).await?;

        Ok(client)
    }

    /// Waits for the next non-empty line, without its line terminator.
    ///
    /// Returns `Ok(None)` once the server closes the connection. Bytes that
    /// are not valid UTF-8 are replaced with `U+FFFD`. A keepalive is sent
    /// first whenever the keepalive interval has passed.
    pub async fn read_line(&mut self) -> Result<Option<&str>, ClientError> {
        loop {
            if self.last_keepalive.elapsed() >= self.config.keepalive_interval {
                self.send_keepalive().await?;
            }

            self.buffer.clear();
            let read = timeout(
                self.config.read_timeout,
                self.reader.read_until(b'\n', &mut self.buffer),
            )
            .await;

            match read {
                Err(_) => {
                    warn!("No data received for {:?}, disconnecting", self.config.read_timeout);
                    return Err(ClientError::Timeout(self.config.read_timeout));
                }
                Ok(Err(e)) => return Err(e.into()),
                Ok(Ok(0)) => {
                    info!("APRS server closed the connection");
                    return Ok(None);
                }
                Ok(Ok(_)) => {}
            }

            let mut end = self.buffer.len();
            while end > 0 && matches!(self.buffer[end - 1], b'\n' | b'\r') {
                end -= 1;
            }
            if end > 0 {
                self.line = String::from_utf8_lossy(&self.buffer[..end]).into_owned();
                break;
            }
        }

        Ok(Some(self.line.as_str()))
    }

    /// Moves the range filter of the running session.
    pub async fn update_filter(
        &mut self,
        latitude: f64,
        longitude: f64,
        radius_km: u32,
    ) -> Result<(), ClientError> {
        let command = filter_command(latitude, longitude, radius_km);
        debug!("Updating filter: {}", command.trim());
        self.send(&command).await?;

        self.config.latitude = latitude;
        self.config.longitude = longitude;
        self.config.radius_km = radius_km;
        Ok(())
    }

    pub async fn send_keepalive(&mut self) -> Result<(), ClientError> {
        let keepalive = format!("# {} keepalive\r\n", self.config.app_name);
        self.send(&keepalive).await?;
        trace!("Sent keepalive to APRS server");
        self.last_keepalive = Instant::now();
        Ok(())
    }

    async fn send(&mut self, line: &str) -> Result<(), ClientError> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
