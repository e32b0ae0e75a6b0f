use log::{debug, error};
use netstat2::{AddressFamilyFlags, ProtocolFlags, ProtocolSocketInfo};
use std::collections::HashMap;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System as SysInfo};

use crate::models::network::ConnectionRow;

const ESTABLISHED: &str = "ESTABLISHED";

/// Enumerates the OS socket table, resolves owning process names and
/// ranks the result for display. Returns an empty list when the OS
/// denies the enumeration (insufficient privilege is common).
pub fn list_connections(sys: &mut SysInfo, max_rows: usize) -> Vec<ConnectionRow> {
    let start = Instant::now();
    let af_flags = AddressFamilyFlags::IPV4 | AddressFamilyFlags::IPV6;
    let proto_flags = ProtocolFlags::TCP | ProtocolFlags::UDP;

    let sockets = match netstat2::get_sockets_info(af_flags, proto_flags) {
        Ok(sockets) => sockets,
        Err(x) => {
            error!("Socket enumeration error: {}", x);
            return Vec::new();
        }
    };

    sys.refresh_processes(ProcessesToUpdate::All, true);

    // one name lookup per distinct pid per call
    let mut names: HashMap<u32, String> = HashMap::new();
    let mut rows = Vec::with_capacity(sockets.len());
    for socket in &sockets {
        let pid = socket.associated_pids.first().copied();
        let process = match pid {
            Some(pid) => names
                .entry(pid)
                .or_insert_with(|| process_name(sys, pid))
                .clone(),
            None => "-".to_string(),
        };

        let (local, remote, status) = match &socket.protocol_socket_info {
            ProtocolSocketInfo::Tcp(tcp) => (
                format!("{}:{}", tcp.local_addr, tcp.local_port),
                format!("{}:{}", tcp.remote_addr, tcp.remote_port),
                tcp.state.to_string(),
            ),
            ProtocolSocketInfo::Udp(udp) => (
                format!("{}:{}", udp.local_addr, udp.local_port),
                "-".to_string(),
                "NONE".to_string(),
            ),
        };

        rows.push(ConnectionRow {
            local,
            remote,
            status,
            pid,
            process,
        });
    }

    rank(&mut rows);
    rows.truncate(max_rows);
    debug!("list_connections took: {} ms", start.elapsed().as_millis());
    rows
}

fn process_name(sys: &SysInfo, pid: u32) -> String {
    match sys.process(Pid::from_u32(pid)) {
        Some(process) => process.name().to_string_lossy().into_owned(),
        None => "?".to_string(),
    }
}

/// Established connections first, then process name, then pid.
pub(crate) fn rank(rows: &mut [ConnectionRow]) {
    rows.sort_by(|a, b| {
        (a.status != ESTABLISHED, &a.process, a.pid.unwrap_or(0)).cmp(&(
            b.status != ESTABLISHED,
            &b.process,
            b.pid.unwrap_or(0),
        ))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, process: &str, pid: u32) -> ConnectionRow {
        ConnectionRow {
            local: "127.0.0.1:1".to_string(),
            remote: "-".to_string(),
            status: status.to_string(),
            pid: Some(pid),
            process: process.to_string(),
        }
    }

    #[test]
    fn test_established_sort_first() {
        let mut rows = vec![
            row("CLOSE_WAIT", "b", 10),
            row("ESTABLISHED", "a", 20),
            row("ESTABLISHED", "c", 30),
        ];
        rank(&mut rows);
        assert_eq!(rows[0].process, "a");
        assert_eq!(rows[1].process, "c");
        assert_eq!(rows[2].process, "b");
    }

    #[test]
    fn test_name_ties_break_by_pid() {
        let mut rows = vec![
            row("ESTABLISHED", "same", 9),
            row("ESTABLISHED", "same", 3),
        ];
        rank(&mut rows);
        assert_eq!(rows[0].pid, Some(3));
        assert_eq!(rows[1].pid, Some(9));
    }

    #[test]
    fn test_missing_pid_sorts_like_zero() {
        let mut rows = vec![
            row("LISTEN", "x", 5),
            ConnectionRow {
                local: "-".to_string(),
                remote: "-".to_string(),
                status: "LISTEN".to_string(),
                pid: None,
                process: "x".to_string(),
            },
        ];
        rank(&mut rows);
        assert_eq!(rows[0].pid, None);
    }
}
