//! Minimal single-session FTP server on loopback, passive mode only.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

#[derive(Default)]
struct Recorded {
    commands: Vec<String>,
    files: Vec<(String, Vec<u8>)>,
}

pub struct FakeFtpServer {
    pub addr: SocketAddr,
    recorded: Arc<Mutex<Recorded>>,
    handle: JoinHandle<()>,
}

impl FakeFtpServer {
    pub fn start() -> Self {
        Self::spawn(true)
    }

    pub fn rejecting_login() -> Self {
        Self::spawn(false)
    }

    fn spawn(accept_login: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind control port");
        let addr = listener.local_addr().expect("Failed to read control address");
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = recorded.clone();

        let handle = thread::spawn(move || {
            let (control, _) = listener.accept().expect("Failed to accept control connection");
            serve(control, accept_login, &state);
        });

        Self {
            addr,
            recorded,
            handle,
        }
    }

    /// Waits for the client to leave and returns the command verbs seen
    /// (arguments dropped for USER/PASS) and the stored files.
    pub fn finish(self) -> (Vec<String>, Vec<(String, Vec<u8>)>) {
        self.handle.join().expect("FTP server thread panicked");
        let recorded = self.recorded.lock().expect("poisoned");
        (recorded.commands.clone(), recorded.files.clone())
    }
}

fn serve(control: TcpStream, accept_login: bool, state: &Mutex<Recorded>) {
    let mut reader = BufReader::new(control.try_clone().expect("Failed to clone control stream"));
    let mut writer = control;
    let mut passive: Option<TcpListener> = None;

    reply(&mut writer, "220 fake ftp ready");
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end().to_string();
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb.to_ascii_uppercase(), arg.to_string()),
            None => (line.to_ascii_uppercase(), String::new()),
        };
        let logged = match verb.as_str() {
            "USER" | "PASS" => verb.clone(),
            _ => line.clone(),
        };
        state.lock().expect("poisoned").commands.push(logged);

        match verb.as_str() {
            "USER" => reply(&mut writer, "331 password required"),
            "PASS" if accept_login => reply(&mut writer, "230 logged in"),
            "PASS" => reply(&mut writer, "530 Login incorrect"),
            "TYPE" => reply(&mut writer, "200 type set"),
            "PASV" => {
                let data = TcpListener::bind("127.0.0.1:0").expect("Failed to bind data port");
                let port = data.local_addr().expect("Failed to read data address").port();
                passive = Some(data);
                reply(
                    &mut writer,
                    &format!("227 Entering Passive Mode (127,0,0,1,{},{})", port >> 8, port & 0xff),
                );
            }
            "STOR" => match passive.take() {
                Some(data) => {
                    reply(&mut writer, "150 opening data connection");
                    let (mut conn, _) = data.accept().expect("Failed to accept data connection");
                    let mut contents = Vec::new();
                    let _ = conn.read_to_end(&mut contents);
                    state.lock().expect("poisoned").files.push((arg, contents));
                    reply(&mut writer, "226 done");
                }
                None => reply(&mut writer, "425 use PASV first"),
            },
            "QUIT" => {
                reply(&mut writer, "221 bye");
                break;
            }
            _ => reply(&mut writer, "502 command not implemented"),
        }
    }
}

fn reply(writer: &mut TcpStream, message: &str) {
    let _ = writer.write_all(format!("{message}\r\n").as_bytes());
}

/// A loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("Failed to read address").port()
}
