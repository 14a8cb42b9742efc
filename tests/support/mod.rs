use serde_json::{json, Value};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Post payload shaped like the server's serializer output
pub fn post_json(id: u64, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "picture_name": format!("posts/{}.jpg", id),
        "category": category,
        "title": title,
        "reward": "20.00",
        "status": "active",
        "body_text": "",
    })
}
