//! End-to-end harness test: issue a certificate, terminate TLS with it, and
//! exercise every endpoint through the trusting client.

use std::net::SocketAddr;

use axum_server::Handle;
use tlsboot_client::HarnessClient;
use tlsboot_pki::IssuanceRequest;
use tlsboot_server::{HarnessServer, ServerConfig};

#[tokio::test]
async fn issue_serve_and_probe_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cert_path = dir.path().join("cert.pem");
    let key_path = dir.path().join("key.pem");
    let upload_dir = dir.path().join("uploads");

    // Issue the artifacts the server will load verbatim.
    let request = IssuanceRequest::builder("localhost,127.0.0.1")
        .cert_path(&cert_path)
        .key_path(&key_path)
        .organization("Test Org")
        .validity_days(7)
        .build()
        .unwrap();
    tlsboot_pki::issue(&request).unwrap();

    // Serve on an ephemeral port.
    let config = ServerConfig::new("127.0.0.1:0".parse().unwrap())
        .with_cert_path(&cert_path)
        .with_key_path(&key_path)
        .with_upload_dir(&upload_dir);
    let server = HarnessServer::new(config);

    let handle = Handle::new();
    let server_handle = handle.clone();
    let task = tokio::spawn(async move { server.serve_with_handle(server_handle).await });

    let addr: SocketAddr = handle.listening().await.expect("server failed to bind");
    let base_url = format!("https://localhost:{}", addr.port());

    let client = HarnessClient::new(&base_url, &cert_path).unwrap();

    // GET /
    assert_eq!(
        client.get_home().await.unwrap(),
        "Welcome to the TLS test server!"
    );

    // POST /postjson
    assert_eq!(
        client.post_json("Hello, server!").await.unwrap(),
        "Received JSON: Hello, server!"
    );

    // POST /upload
    let payload = dir.path().join("testfile.txt");
    std::fs::write(&payload, b"upload me").unwrap();
    assert_eq!(
        client.upload_file(&payload).await.unwrap(),
        "File uploaded successfully: testfile.txt"
    );
    assert_eq!(
        std::fs::read(upload_dir.join("testfile.txt")).unwrap(),
        b"upload me"
    );

    handle.shutdown();
    let _ = task.await;
}
