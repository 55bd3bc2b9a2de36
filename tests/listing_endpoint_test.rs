use food_trucks::{load_pages, ClockTime, DayOrder, FetchError, Settings, TruckClient};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;

const PATH: &str = "/resource/bbb8-hzi6.json";

fn settings(endpoint: String, day: u8, at: &str) -> Settings {
  Settings {
    endpoint,
    page_size: 10,
    day: DayOrder::new(day).unwrap(),
    at: at.parse::<ClockTime>().unwrap(),
    timeout: None
  }
}

fn listing(name: &str, open: &str, close: &str) -> serde_json::Value {
  serde_json::json!({
    "applicant": name,
    "location": format!("{} Street", name),
    "start24": open,
    "end24": close,
    "dayorder": "2",
    "permit": "18MFF-0001"
  })
}

#[tokio::test]
async fn fetches_the_requested_day_and_pages_the_open_trucks() {
  let mut server = Server::new_async().await;
  let body = serde_json::Value::Array(vec![
    listing("Zeta", "08:00", "20:00"),
    listing("Closed Already", "06:00", "09:00"),
    listing("alpha", "08:00", "20:00")
  ]);
  let mock = server
    .mock("GET", PATH)
    .match_query(Matcher::UrlEncoded("dayorder".into(), "2".into()))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(body.to_string())
    .create_async()
    .await;

  let settings = settings(format!("{}{}", server.url(), PATH), 2, "12:00");
  let client = TruckClient::new(settings.endpoint.clone());
  let pages = load_pages(&client, &settings).await.unwrap();

  mock.assert_async().await;
  assert_eq!(pages.len(), 1);
  let names: Vec<&str> = pages.page(0).unwrap().iter().map(|t| t.name.as_str()).collect();
  assert_eq!(names, vec!["alpha", "Zeta"]);
  assert_eq!(pages.page(0).unwrap()[1].address, "Zeta Street");
  assert_eq!(pages.page(0).unwrap()[1].extra["permit"], "18MFF-0001");
}

#[tokio::test]
async fn twenty_five_open_trucks_arrive_as_three_pages() {
  let mut server = Server::new_async().await;
  let body: Vec<_> = (0..25).map(|i| listing(&format!("Truck {:02}", i), "00:00", "24:00")).collect();
  let _mock = server
    .mock("GET", PATH)
    .match_query(Matcher::Any)
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(serde_json::Value::Array(body).to_string())
    .create_async()
    .await;

  let settings = settings(format!("{}{}", server.url(), PATH), 5, "23:59");
  let pages = load_pages(&TruckClient::new(settings.endpoint.clone()), &settings).await.unwrap();

  let sizes: Vec<usize> = pages.iter().map(|p| p.len()).collect();
  assert_eq!(sizes, vec![10, 10, 5]);
}

#[tokio::test]
async fn server_errors_are_returned_without_retrying() {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("GET", PATH)
    .match_query(Matcher::Any)
    .with_status(503)
    .expect(1)
    .create_async()
    .await;

  let settings = settings(format!("{}{}", server.url(), PATH), 0, "12:00");
  let result = load_pages(&TruckClient::new(settings.endpoint.clone()), &settings).await;

  mock.assert_async().await;
  match result {
    Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 503),
    other => panic!("expected a status error, got {:?}", other)
  }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
  // nothing listens on the discard port
  let settings = settings("http://127.0.0.1:9/listings.json".into(), 1, "12:00");
  let result = load_pages(&TruckClient::new(settings.endpoint.clone()), &settings).await;

  assert!(matches!(result, Err(FetchError::Transport { .. })), "got {:?}", result);
}

#[tokio::test]
async fn a_body_that_is_not_a_listing_array_fails_to_decode() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", PATH)
    .match_query(Matcher::Any)
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(r#"{"error": "dataset moved"}"#)
    .create_async()
    .await;

  let settings = settings(format!("{}{}", server.url(), PATH), 4, "12:00");
  let result = load_pages(&TruckClient::new(settings.endpoint.clone()), &settings).await;

  assert!(matches!(result, Err(FetchError::Decode(_))), "got {:?}", result);
}
