//! Full CRUD lifecycle test against a live server.
//!
//! # Design
//! Starts the server (in-memory backend) on a random port, then exercises
//! every client operation over real HTTP using ureq. Validates that the
//! client's request building and response parsing work end-to-end with the
//! actual server, catching any schema drift between the two crates.

use std::sync::Arc;

use todo_client::{ApiError, CreateItem, HttpMethod, HttpResponse, ItemsClient, UpdateItem};
use todo_server::store::MemoryStore;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation.
fn execute(req: todo_client::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start the server on a random port.
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
            todo_server::run(listener, Arc::new(MemoryStore::new())).await
        })
        .unwrap();
    });

    let client = ItemsClient::new(&format!("http://{addr}"));

    // Step 2: list — should be empty.
    let req = client.build_list_items();
    let items = client.parse_list_items(execute(req)).unwrap();
    assert!(items.is_empty(), "expected empty list");

    // Step 3: create an item with the adapter's payload shape.
    let create_input = CreateItem {
        name: "Integration test".to_string(),
        is_complete: false,
    };
    let req = client.build_create_item(&create_input).unwrap();
    let created = client.parse_create_item(execute(req)).unwrap();
    assert_eq!(created.name, "Integration test");
    assert!(!created.is_complete);
    let id = created.id;

    // Step 4: get the created item.
    let req = client.build_get_item(id);
    let fetched = client.parse_get_item(execute(req)).unwrap();
    assert_eq!(fetched, created);

    // Step 5: mark complete — flag-only update, name must survive.
    let update_input = UpdateItem {
        name: None,
        is_complete: true,
    };
    let req = client.build_update_item(id, &update_input).unwrap();
    client.parse_update_item(execute(req)).unwrap();

    let req = client.build_get_item(id);
    let fetched = client.parse_get_item(execute(req)).unwrap();
    assert_eq!(fetched.name, "Integration test");
    assert!(fetched.is_complete);

    // Step 6: rename, keeping the flag explicitly.
    let update_input = UpdateItem {
        name: Some("Updated name".to_string()),
        is_complete: true,
    };
    let req = client.build_update_item(id, &update_input).unwrap();
    client.parse_update_item(execute(req)).unwrap();

    let req = client.build_get_item(id);
    let fetched = client.parse_get_item(execute(req)).unwrap();
    assert_eq!(fetched.name, "Updated name");
    assert!(fetched.is_complete);
    assert_eq!(fetched.id, id);

    // Step 7: list — should have one item.
    let req = client.build_list_items();
    let items = client.parse_list_items(execute(req)).unwrap();
    assert_eq!(items.len(), 1);

    // Step 8: delete.
    let req = client.build_delete_item(id);
    client.parse_delete_item(execute(req)).unwrap();

    // Step 9: get after delete — should be NotFound.
    let req = client.build_get_item(id);
    let err = client.parse_get_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 10: delete again — should be NotFound.
    let req = client.build_delete_item(id);
    let err = client.parse_delete_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 11: update after delete — should be NotFound.
    let req = client
        .build_update_item(
            id,
            &UpdateItem {
                name: None,
                is_complete: false,
            },
        )
        .unwrap();
    let err = client.parse_update_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 12: list — should be empty again.
    let req = client.build_list_items();
    let items = client.parse_list_items(execute(req)).unwrap();
    assert!(items.is_empty(), "expected empty list after delete");
}
