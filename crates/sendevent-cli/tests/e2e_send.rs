//! E2E tests for the `sendevent` binary.
//!
//! Validation failures are asserted on exit code and stderr; delivery is
//! asserted against a real loopback TCP listener that reads everything
//! the binary writes, up to EOF.

use std::io::Read;
use std::net::TcpListener;
use std::thread;

use assert_cmd::Command;
use predicates::str::contains;

fn sendevent_cmd() -> Command {
    Command::cargo_bin("sendevent").expect("sendevent binary should build")
}

/// Binds a loopback listener and returns (port string, receiver handle).
fn spawn_listener() -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let port = listener.local_addr().expect("local addr").port().to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut received = String::new();
        stream.read_to_string(&mut received).expect("read to EOF");
        received
    });
    (port, handle)
}

// ─── Usage / validation ────────────────────────────────────────────

#[test]
fn no_args_prints_usage_and_exits_zero() {
    sendevent_cmd()
        .assert()
        .success()
        .stdout(contains("--uei"))
        .stdout(contains("--interface"));
}

#[test]
fn missing_uei_fails_with_exit_one() {
    sendevent_cmd()
        .args(["-i", "10.0.0.1"])
        .assert()
        .code(1)
        .stderr(contains("required field uei is not set"));
}

#[test]
fn missing_interface_fails_with_exit_one() {
    sendevent_cmd()
        .args(["-u", "uei.example/test"])
        .assert()
        .code(1)
        .stderr(contains("required field interface is not set"));
}

#[test]
fn invalid_severity_fails_before_sending() {
    sendevent_cmd()
        .args(["-u", "uei.example/test", "-i", "10.0.0.1", "-x", "9"])
        .assert()
        .code(1)
        .stderr(contains("severity 9 is not valid"));
}

#[test]
fn non_numeric_severity_fails_before_sending() {
    sendevent_cmd()
        .args(["-u", "uei.example/test", "-i", "10.0.0.1", "-x", "high"])
        .assert()
        .code(1)
        .stderr(contains("severity high is not an integer"));
}

#[test]
fn invalid_node_id_fails_before_sending() {
    sendevent_cmd()
        .args(["-u", "uei.example/test", "-i", "10.0.0.1", "-n", "abc"])
        .assert()
        .code(1)
        .stderr(contains("node id abc is not an integer"));
}

#[test]
fn invalid_port_fails_before_connecting() {
    sendevent_cmd()
        .args(["-u", "uei.example/test", "-i", "10.0.0.1", "-t", "notaport"])
        .assert()
        .code(1)
        .stderr(contains("TCP port notaport is not a positive integer"));
}

#[test]
fn connection_refused_fails_with_exit_one() {
    // Bind then drop to get a port with nothing listening on it.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port().to_string()
    };

    sendevent_cmd()
        .args([
            "-u", "uei.example/test", "-i", "10.0.0.1", "-H", "127.0.0.1", "-t", port.as_str(),
        ])
        .assert()
        .code(1)
        .stderr(contains("failed to connect"));
}

// ─── Delivery ──────────────────────────────────────────────────────

#[test]
fn sends_well_formed_event_to_listener() {
    let (port, receiver) = spawn_listener();

    sendevent_cmd()
        .args([
            "-u", "uei.example/test", "-i", "10.0.0.1", "-H", "127.0.0.1", "-t", port.as_str(),
        ])
        .assert()
        .success();

    let received = receiver.join().expect("listener thread");
    assert!(received.starts_with("<log>\n"));
    assert!(received.contains("<uei>uei.example/test</uei>"));
    assert!(received.contains("<interface>10.0.0.1</interface>"));
    assert!(received.contains("<source>jsendevent</source>"));
    assert!(received.trim_end().ends_with("</log>"));
    // No optional fields were given, so none may appear.
    assert!(!received.contains("<nodeid>"));
    assert!(!received.contains("<parms>"));
}

#[test]
fn sends_parameters_in_command_line_order() {
    let (port, receiver) = spawn_listener();

    sendevent_cmd()
        .args([
            "-u", "uei.example/test", "-i", "10.0.0.1", "-H", "127.0.0.1", "-t", port.as_str(),
            "-p", "url", "http://x", "-p", "retries", "3",
        ])
        .assert()
        .success();

    let received = receiver.join().expect("listener thread");
    let url = received
        .find("<parmName><![CDATA[url]]></parmName>")
        .expect("url parm present");
    let retries = received
        .find("<parmName><![CDATA[retries]]></parmName>")
        .expect("retries parm present");
    assert!(url < retries, "parameters out of order:\n{received}");
    assert!(received.contains("<value type=\"string\" encoding=\"text\"><![CDATA[http://x]]></value>"));
}

#[test]
fn sends_full_event_with_all_optional_fields() {
    let (port, receiver) = spawn_listener();

    sendevent_cmd()
        .args([
            "-u", "uei.example/test", "-i", "10.0.0.1", "-H", "127.0.0.1", "-t", port.as_str(),
            "-n", "42", "-s", "ICMP", "-x", "6", "-d", "gateway unreachable",
            "-o", "check the uplink",
        ])
        .assert()
        .success();

    let received = receiver.join().expect("listener thread");
    assert!(received.contains("<nodeid>42</nodeid>"));
    assert!(received.contains("<service>ICMP</service>"));
    assert!(received.contains("<severity>Major</severity>"));
    assert!(received.contains("<descr>gateway unreachable</descr>"));
    assert!(received.contains("<operinstruct>check the uplink</operinstruct>"));
}

#[test]
fn verbose_flag_logs_the_rendered_document() {
    let (port, receiver) = spawn_listener();

    sendevent_cmd()
        .args([
            "-u", "uei.example/test", "-i", "10.0.0.1", "-H", "127.0.0.1", "-t", port.as_str(), "-v",
        ])
        .assert()
        .success()
        .stdout(contains("event document rendered"))
        .stdout(contains("event sent"));

    receiver.join().expect("listener thread");
}
