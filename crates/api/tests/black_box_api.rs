use std::sync::Arc;

use greenscape_api::app::{AppServices, build_app};
use greenscape_infra::{DisabledMailer, InMemoryOutbox, Mailer};
use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(mailer: Arc<dyn Mailer>) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = build_app(Arc::new(AppServices::in_memory(mailer)), None);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    async fn with_outbox() -> (Self, Arc<InMemoryOutbox>) {
        let outbox = Arc::new(InMemoryOutbox::new());
        (Self::spawn(outbox.clone()).await, outbox)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client.post(self.url(path)).json(&body).send().await.unwrap()
    }

    async fn put(&self, path: &str, body: Value) -> reqwest::Response {
        self.client.put(self.url(path)).json(&body).send().await.unwrap()
    }

    async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    /// Add an item and return its id.
    async fn add_item(&self, name: &str, quantity: u32, supplier: &str) -> String {
        let res = self
            .post(
                "/inventories",
                json!({
                    "itemName": name,
                    "category": "Gardening Tools & Equipment",
                    "quantity": quantity,
                    "supplier": supplier,
                    "price": 1250.5,
                    "maintenanceSchedule": "Every Week",
                }),
            )
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = res.json().await.unwrap();
        body["inventory"]["id"].as_str().unwrap().to_string()
    }

    async fn set_reorder_level(&self, id: &str, level: u32) {
        let res = self
            .put(&format!("/inventories/{id}/reorder-level"), json!({ "reorderLevel": level }))
            .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::spawn(Arc::new(DisabledMailer)).await;
    assert_eq!(server.get("/health").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn inventory_crud_round_trip() {
    let (server, _) = TestServer::with_outbox().await;

    let empty: Value = server.get("/inventories").await.json().await.unwrap();
    assert_eq!(empty["inventories"], json!([]));

    let id = server.add_item("Hedge Trimmer", 4, "Lanka Agro").await;

    let res = server.get(&format!("/inventories/{id}")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["inventory"]["itemName"], "Hedge Trimmer");
    assert_eq!(body["inventory"]["reorderLevel"], 0);

    server.set_reorder_level(&id, 6).await;

    // Full replacement keeps the reorder level.
    let res = server
        .put(
            &format!("/inventories/{id}"),
            json!({
                "itemName": "Hedge Trimmer XL",
                "category": "Vehicles & Machinery",
                "quantity": 9,
                "supplier": "Ceylon Tools",
                "price": 300,
                "maintenanceSchedule": "Every Month",
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["inventory"]["itemName"], "Hedge Trimmer XL");
    assert_eq!(body["inventory"]["reorderLevel"], 6);

    let res = server
        .client
        .delete(server.url(&format!("/inventories/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Inventory item deleted successfully");
    assert_eq!(body["inventory"]["id"], id.as_str());

    assert_eq!(server.get(&format!("/inventories/{id}")).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_item_rejects_invalid_input() {
    let (server, _) = TestServer::with_outbox().await;

    let res = server
        .post(
            "/inventories",
            json!({
                "itemName": "12345",
                "category": "Other",
                "quantity": 1,
                "supplier": "Agro",
                "price": 10,
                "maintenanceSchedule": "Every Day",
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    // Unknown category is a body rejection, still reported as JSON.
    let res = server
        .post("/inventories", json!({ "itemName": "Rake", "category": "Toys" }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn reorder_threshold_validation_and_not_found() {
    let (server, _) = TestServer::with_outbox().await;
    let id = server.add_item("Spade", 3, "Agro").await;

    for bad in [
        json!(0),
        json!(-1),
        json!(-2),
        json!(2.5),
        json!("5"),
        json!("abc"),
        Value::Null,
    ] {
        let res = server
            .put(&format!("/inventories/{id}/reorder-level"), json!({ "reorderLevel": bad }))
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "value {bad}");
    }

    let res = server
        .put(&format!("/inventories/{id}/reorder-level"), json!({ "reorderLevel": 0 }))
        .await;
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Reorder level must be a positive number");

    // Rejected updates never reach the store.
    let body: Value = server.get(&format!("/inventories/{id}")).await.json().await.unwrap();
    assert_eq!(body["inventory"]["reorderLevel"], 0);

    // A whole-valued float is an ordinary positive number.
    let res = server
        .put(&format!("/inventories/{id}/reorder-level"), json!({ "reorderLevel": 5.0 }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["reorderLevel"], 5);

    for bad in [json!(-1), json!("abc")] {
        let res = server
            .put(&format!("/inventories/{id}/reorder-level"), json!({ "reorderLevel": bad }))
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "value {bad}");
        let body: Value = server.get(&format!("/inventories/{id}")).await.json().await.unwrap();
        assert_eq!(body["inventory"]["reorderLevel"], 5, "after {bad}");
    }

    let res = server
        .put(&format!("/inventories/{id}/reorder-amount"), json!({ "reorderAmount": 25 }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["reorderAmount"], 25);
    assert_eq!(body["reorderLevel"], 5);

    let missing = "0190f5d2-7c3a-7b4e-9a51-3f4be2c1d0aa";
    let res = server
        .put(&format!("/inventories/{missing}/reorder-level"), json!({ "reorderLevel": 5 }))
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The miss created nothing.
    let body: Value = server.get("/inventories").await.json().await.unwrap();
    let items = body["inventories"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
}

#[tokio::test]
async fn low_stock_evaluation_buckets_and_message() {
    let (server, _) = TestServer::with_outbox().await;

    let gloves = server.add_item("Gloves", 1, "Agro").await;
    let hose = server.add_item("Hose", 3, "Agro").await;
    let seed = server.add_item("Seed Bags", 5, "Agro").await;
    let _unset = server.add_item("Wheelbarrow", 0, "Agro").await;

    server.set_reorder_level(&gloves, 5).await;
    server.set_reorder_level(&hose, 5).await;
    server.set_reorder_level(&seed, 5).await;

    let body: Value = server.get("/inventories/low-stock").await.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["counts"], json!({ "critical": 1, "warning": 1, "notice": 1 }));
    assert_eq!(body["overall"], "critical");
    assert_eq!(
        body["message"],
        "Stock Alerts: 1 critical (≤1 unit), 1 warning (2-3 units), 1 notice (>3 units) need reordering!"
    );
    assert_eq!(body["items"][0]["itemName"], "Gloves");
    assert_eq!(body["items"][0]["severity"], "critical");
}

#[tokio::test]
async fn listing_filters_and_sorts() {
    let (server, _) = TestServer::with_outbox().await;
    server.add_item("Rake", 7, "Lanka Agro").await;
    server.add_item("axe", 2, "Ceylon Tools").await;
    server.add_item("Mower", 4, "Lanka Agro").await;

    let body: Value = server.get("/inventories?sort=name").await.json().await.unwrap();
    let names: Vec<&str> = body["inventories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["itemName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["axe", "Mower", "Rake"]);

    let body: Value = server
        .get("/inventories?supplier=Lanka%20Agro&sort=quantity")
        .await
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = body["inventories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["itemName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Mower", "Rake"]);

    let body: Value = server.get("/inventories?search=CEYLON").await.json().await.unwrap();
    assert_eq!(body["inventories"].as_array().unwrap().len(), 1);

    let res = server.get("/inventories?sort=price").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn csv_report_download() {
    let (server, _) = TestServer::with_outbox().await;
    server.add_item("Rake", 7, "Lanka Agro").await;
    server.add_item("Axe", 2, "Ceylon Tools").await;

    let res = server.get("/inventories/report?kind=inventory&sort=name").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()["content-disposition"]
            .to_str()
            .unwrap()
            .contains("inventory_report.csv")
    );
    let text = res.text().await.unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Item Name,Category,Quantity,Supplier,Price,Maintenance Schedule,Reorder Level"
    );
    assert_eq!(
        lines[1],
        "Axe,Gardening Tools & Equipment,2,Ceylon Tools,Rs.1250.50,Every Week,Not set"
    );
}

#[tokio::test]
async fn send_pdf_report_mails_decoded_attachment() {
    let (server, outbox) = TestServer::with_outbox().await;

    let res = server
        .post(
            "/inventories/send-email",
            json!({ "pdfData": "JVBERi0xLjQ=", "recipientEmail": "owner@greenscape.lk" }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Email sent successfully");

    let sent = outbox.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "owner@greenscape.lk");
    let attachment = sent[0].attachment.as_ref().unwrap();
    assert_eq!(attachment.file_name, "low_stock_alerts_report.pdf");
    assert_eq!(attachment.bytes, b"%PDF-1.4".to_vec());
}

#[tokio::test]
async fn send_pdf_report_validation_and_configuration_errors() {
    let (server, outbox) = TestServer::with_outbox().await;

    let res = server
        .post("/inventories/send-email", json!({ "recipientEmail": "owner@greenscape.lk" }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Missing required data");

    let res = server
        .post(
            "/inventories/send-email",
            json!({ "pdfData": "not base64!!", "recipientEmail": "owner@greenscape.lk" }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(outbox.sent().is_empty());

    let unconfigured = TestServer::spawn(Arc::new(DisabledMailer)).await;
    let res = unconfigured
        .post(
            "/inventories/send-email",
            json!({ "pdfData": "JVBERi0xLjQ=", "recipientEmail": "owner@greenscape.lk" }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Email configuration error");
}

#[tokio::test]
async fn low_stock_email_sends_server_rendered_csv() {
    let (server, outbox) = TestServer::with_outbox().await;
    let gloves = server.add_item("Gloves", 1, "Agro").await;
    server.add_item("Hose", 9, "Agro").await;
    server.set_reorder_level(&gloves, 4).await;

    let res = server
        .post("/inventories/low-stock/email", json!({ "recipientEmail": "owner@greenscape.lk" }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let sent = outbox.sent();
    assert_eq!(sent.len(), 1);
    let attachment = sent[0].attachment.as_ref().unwrap();
    assert_eq!(attachment.file_name, "low_stock_alerts_report.csv");
    let csv = String::from_utf8(attachment.bytes.clone()).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Gloves"));
    assert!(!csv.contains("Hose"));
}

#[tokio::test]
async fn low_stock_email_is_not_sent_when_nothing_is_low() {
    let (server, outbox) = TestServer::with_outbox().await;
    let hose = server.add_item("Hose", 9, "Agro").await;
    server.set_reorder_level(&hose, 4).await;

    let res = server
        .post("/inventories/low-stock/email", json!({ "recipientEmail": "owner@greenscape.lk" }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "No low stock items to report");
    assert!(outbox.sent().is_empty());
}

#[tokio::test]
async fn maintenance_log_lifecycle() {
    let (server, _) = TestServer::with_outbox().await;

    assert_eq!(server.get("/maintenance").await.status(), StatusCode::NOT_FOUND);

    let res = server
        .post(
            "/maintenance",
            json!({
                "itemId": "664f1c",
                "itemName": "Lawn Mower",
                "maintenanceType": "Repair",
                "maintenanceDate": "2025-03-14",
                "performedBy": "Nimal",
                "status": "Pending",
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .post(
            "/maintenance",
            json!({
                "itemId": "664f1c",
                "itemName": "Lawn Mower",
                "maintenanceType": "Repair",
                "maintenanceDate": "2025-03-14",
                "performedBy": "Nimal",
                "cost": 4500,
                "status": "Pending",
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    let id = body["maintenanceRecord"]["id"].as_str().unwrap().to_string();

    let res = server
        .put(&format!("/maintenance/{id}"), json!({ "status": "In Progress" }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["maintenanceRecord"]["status"], "In Progress");
    assert_eq!(body["maintenanceRecord"]["cost"], 4500.0);

    let list: Value = server.get("/maintenance").await.json().await.unwrap();
    assert_eq!(list["maintenanceRecords"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn usage_report_lifecycle() {
    let (server, _) = TestServer::with_outbox().await;

    let res = server
        .post(
            "/usage",
            json!({
                "projectName": "Kandy Villa Garden",
                "itemId": "664f1c",
                "itemName": "Fertilizer",
                "quantityUsed": 12,
                "dateOfUsage": "2025-02-01",
                "usedBy": "Kasun",
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    let id = body["usageReport"]["id"].as_str().unwrap().to_string();

    let res = server.get(&format!("/usage/{id}")).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = server
        .client
        .delete(server.url(&format!("/usage/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(server.get("/usage").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chatbot_replies_and_falls_back() {
    let server = TestServer::spawn(Arc::new(DisabledMailer)).await;

    let res = server
        .post("/chatbot", json!({ "messages": [{ "role": "user", "content": "hello" }] }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["reply"], "Hello! Welcome to GreenScape. How can I help you today?");

    let body: Value = server
        .post("/chatbot", json!({ "messages": [{ "content": "repair my roof tiles" }] }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["reply"], "I'm not sure how to respond to that. Can you rephrase?");

    let res = server.post("/chatbot", json!({ "messages": [] })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["reply"], "I didn't understand that. Can you rephrase?");
}

fn booking(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "phone": "0771234567",
        "address": "12 Lake Road",
        "city": "Kandy",
        "serviceType": "Garden Design",
        "receiveUpdates": true,
    })
}

#[tokio::test]
async fn appointment_booking_and_follow_up() {
    let (server, outbox) = TestServer::with_outbox().await;

    let res = server.post("/appointments", booking("Dilani", "dilani@example.lk")).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Appointment booked successfully");
    assert_eq!(body["appointment"]["appointmentId"], "APPT-0001");
    assert_eq!(body["appointment"]["siteAnalysisStatus"], "Pending");
    assert_eq!(body["appointment"]["projectStatus"], "Not Started");
    let id = body["appointment"]["id"].as_str().unwrap().to_string();

    let body: Value = server
        .post("/appointments", booking("Ruwan", "ruwan@example.lk"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["appointment"]["appointmentId"], "APPT-0002");

    let sent = outbox.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, "dilani@example.lk");
    assert_eq!(sent[0].subject, "Appointment Confirmation");
    assert!(sent[0].attachment.is_none());

    let res = server
        .put(&format!("/appointments/{id}/site-visit"), json!({ "siteVisitDate": "2025-04-10" }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Site visit scheduled and email sent");
    assert_eq!(body["appointment"]["siteVisitDate"], "2025-04-10");
    assert_eq!(outbox.sent()[2].subject, "Site Visit Scheduled");

    let res = server
        .put(&format!("/appointments/{id}/project-status"), json!({ "status": "Ongoing" }))
        .await;
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Project status updated to Ongoing");

    let res = server
        .put(&format!("/appointments/{id}/project-status"), json!({ "status": "Done" }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .put(
            &format!("/appointments/{id}/update-info"),
            json!({ "siteAnalysisStatus": "Completed", "projectId": "PRJ-7" }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["siteAnalysisStatus"], "Completed");
    assert_eq!(body["projectId"], "PRJ-7");
    assert_eq!(body["projectStatus"], "Ongoing");

    let mine: Value = server
        .get("/appointments/customer?email=DILANI@example.lk")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["appointmentId"], "APPT-0001");

    let res = server.get("/appointments/customer").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server.delete(&format!("/appointments/{id}")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = server.delete(&format!("/appointments/{id}")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Appointment not found");

    let all: Value = server.get("/appointments").await.json().await.unwrap();
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn appointment_booking_survives_mail_outage() {
    let server = TestServer::spawn(Arc::new(DisabledMailer)).await;

    let res = server.post("/appointments", booking("Dilani", "dilani@example.lk")).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    let id = body["appointment"]["id"].as_str().unwrap().to_string();

    let res = server
        .put(&format!("/appointments/{id}/site-visit"), json!({ "siteVisitDate": "2025-04-10" }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Site visit scheduled");

    let res = server.post("/appointments", booking("Bad", "not-an-email")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn service_catalogue_lifecycle() {
    let (server, _) = TestServer::with_outbox().await;

    let res = server
        .post(
            "/services/add",
            json!({ "name": "Lawn Care", "description": "Weekly mowing", "imageUrl": "/img/lawn.png" }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Service added successfully");
    let id = body["service"]["id"].as_str().unwrap().to_string();

    let res = server
        .put(
            &format!("/services/update/{id}"),
            json!({ "name": "Lawn Care Plus", "description": "Mowing and edging" }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["service"]["name"], "Lawn Care Plus");
    assert_eq!(body["service"]["imageUrl"], "/img/lawn.png");

    let res = server.delete(&format!("/services/delete/{id}")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = server
        .put(&format!("/services/update/{id}"), json!({ "name": "X", "description": "Y" }))
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let list: Value = server.get("/services").await.json().await.unwrap();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn feedback_submission_and_listing() {
    let (server, _) = TestServer::with_outbox().await;
    let entry = |rating: i64| {
        json!({
            "employeeName": "Nimal",
            "employeeEmail": "nimal@greenscape.lk",
            "department": "Field Operations",
            "rating": rating,
            "feedback": "More mulch please",
        })
    };

    let res = server.post("/feedback/create", entry(6)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "rating must be between 1 and 5");

    let res = server.post("/feedback/create", entry(4)).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Feedback submitted successfully.");

    let body: Value = server.get("/feedback/all").await.json().await.unwrap();
    let feedbacks = body["feedbacks"].as_array().unwrap();
    assert_eq!(feedbacks.len(), 1);
    assert_eq!(feedbacks[0]["rating"], 4);
    let id = feedbacks[0]["id"].as_str().unwrap().to_string();

    let res = server.delete(&format!("/feedback/delete/{id}")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = server.delete(&format!("/feedback/delete/{id}")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Feedback not found.");
}

#[tokio::test]
async fn transaction_ledger_crud() {
    let (server, _) = TestServer::with_outbox().await;
    let tx = json!({
        "date": "2025-06-01",
        "type": "Expense",
        "subtype": "Fertilizer",
        "amount": 12500,
        "description": "Monthly fertilizer order",
        "payer_payee": "Agro Supplies",
        "method": "Bank Transfer",
    });

    let mut cheque = tx.clone();
    cheque["method"] = json!("Cheque");
    assert_eq!(server.post("/transactions", cheque).await.status(), StatusCode::BAD_REQUEST);

    let mut free = tx.clone();
    free["amount"] = json!(0);
    assert_eq!(server.post("/transactions", free).await.status(), StatusCode::BAD_REQUEST);

    let res = server.post("/transactions", tx).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["payer_payee"], "Agro Supplies");
    let id = body["id"].as_str().unwrap().to_string();

    let res = server
        .put(&format!("/transactions/{id}"), json!({ "type": "Income", "method": "Cash" }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["type"], "Income");
    assert_eq!(body["method"], "Cash");
    assert_eq!(body["amount"], 12500.0);

    let list: Value = server.get("/transactions").await.json().await.unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);

    let res = server.delete(&format!("/transactions/{id}")).await;
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Transaction deleted successfully");
    let res = server.get(&format!("/transactions/{id}")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.get("/transactions/nope").await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn petty_cash_entries_keep_free_text_method() {
    let (server, _) = TestServer::with_outbox().await;
    let entry = json!({
        "date": "2025-06-03",
        "type": "Expense",
        "subtype": "Tea",
        "amount": 450,
        "description": "Site crew refreshments",
        "payer_payee": "Corner shop",
        "method": "Petty cash",
    });

    let res = server.post("/minor-transactions/add", entry.clone()).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["method"], "Petty cash");
    let id = body["id"].as_str().unwrap().to_string();
    let created_at = body["createdAt"].clone();

    let mut changed = entry;
    changed["amount"] = json!(600);
    let body: Value = server
        .put(&format!("/minor-transactions/{id}"), changed)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["amount"], 600.0);
    assert_eq!(body["createdAt"], created_at);

    assert_eq!(server.delete(&format!("/minor-transactions/{id}")).await.status(), StatusCode::OK);
    let list: Value = server.get("/minor-transactions").await.json().await.unwrap();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn invoice_lifecycle() {
    let (server, _) = TestServer::with_outbox().await;
    let invoice = json!({
        "buyer": "Lakeside Hotel",
        "totalAmount": 7000,
        "invoiceDate": "2025-07-01",
        "dueDate": "2025-07-31",
        "items": [{ "product": "Palm seedling", "quantity": 14, "price": 500 }],
    });

    let mut backwards = invoice.clone();
    backwards["dueDate"] = json!("2025-06-01");
    let res = server.post("/invoices", backwards).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "due date cannot be before the invoice date");

    let res = server.post("/invoices", invoice).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "pending");
    let id = body["id"].as_str().unwrap().to_string();

    let res = server.put(&format!("/invoices/{id}"), json!({ "status": "paid" })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "paid");
    assert_eq!(body["items"][0]["quantity"], 14);

    let res = server.put(&format!("/invoices/{id}"), json!({ "status": "void" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = server.get(&format!("/invoices/{id}")).await.json().await.unwrap();
    assert_eq!(body["status"], "paid");

    let res = server.delete(&format!("/invoices/{id}")).await;
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invoice deleted successfully");
    let res = server.get(&format!("/invoices/{id}")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invoice not found");
}
