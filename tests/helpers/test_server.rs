// Test Server Helpers
//
// Spawns the in-memory mall on a random port using actix-test. The server
// stops when the returned TestServer drops.

use actix_web::{web, App};
use mall_e2e::Connection;

pub use actix_test::TestServer;

use super::mock_mall::{configure, Faults, MockMall};

/// Running mock backend plus an anonymous connection pointed at it
pub struct MockBackend {
    pub server: TestServer,
    pub mall: web::Data<MockMall>,
    pub connection: Connection,
}

/// Spawn a well-behaved mock mall
///
/// Must be called from inside an actix runtime (`#[actix_web::test]`).
pub fn spawn_mock_mall() -> MockBackend {
    spawn_mock_mall_with(Faults::default())
}

/// Spawn a mock mall with deliberate bugs switched on
pub fn spawn_mock_mall_with(faults: Faults) -> MockBackend {
    let mall = web::Data::new(MockMall::new(faults));
    let app_data = mall.clone();
    let server = actix_test::start(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(configure)
    });
    let connection = Connection::with_client(reqwest::Client::new(), &server.url(""));

    MockBackend {
        server,
        mall,
        connection,
    }
}
