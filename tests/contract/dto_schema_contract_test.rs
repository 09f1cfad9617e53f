// Contract tests: wire shape of request and response DTOs
//
// Responses the SDK deserializes must also serialize back into values their
// declared schema accepts; request bodies must match the backend's field
// conventions (explicit nulls, flattened paging, numeric prices).

use chrono::Utc;
use mall_e2e::actors::{ActorRole, AuthorizationToken, Authorized, JoinBody};
use mall_e2e::core::{DeclaredSchema, Page, PageRequest, Pagination, RandomGenerator};
use mall_e2e::modules::channels::{Channel, ChannelCreate, ChannelRequest, ChannelSearch};
use mall_e2e::modules::orders::{Order, OrderRequest, OrderStatus};
use mall_e2e::modules::sales::{SaleCreate, SaleUnit, SaleUnitCreate, SaleUnitUpdate};
use rust_decimal_macros::dec;
use serde_json::json;
use uuid::Uuid;

fn assert_conforms<T: serde::Serialize + DeclaredSchema>(value: &T) {
    let json = serde_json::to_value(value).unwrap();
    let violations = T::schema().validate(&json);
    assert!(violations.is_empty(), "{} violations: {:?}", T::schema().type_name(), violations);
}

#[test]
fn test_response_dtos_conform_to_their_schemas() {
    let now = Utc::now();
    let channel = Channel {
        id: Uuid::new_v4(),
        code: "spring".to_string(),
        name: "Spring".to_string(),
        description: None,
        created_at: now,
        updated_at: now,
    };
    assert_conforms(&channel);
    assert_conforms(&Page {
        pagination: Pagination {
            current: 1,
            limit: 100,
            records: 1,
            pages: 1,
        },
        data: vec![channel],
    });

    assert_conforms(&SaleUnit {
        id: Uuid::new_v4(),
        shopping_mall_sale_id: Uuid::new_v4(),
        name: "Large".to_string(),
        primary: true,
        required: true,
        nominal_price: dec!(15000),
        real_price: dec!(12000),
        stock_quantity: 40,
        created_at: now,
        updated_at: now,
    });

    assert_conforms(&Order {
        id: Uuid::new_v4(),
        shopping_mall_member_id: Uuid::new_v4(),
        shopping_mall_cart_id: Uuid::new_v4(),
        status: OrderStatus::Pending,
        total_price: dec!(36000),
        address: "1 Market Street".to_string(),
        memo: None,
        created_at: now,
        updated_at: now,
    });

    assert_conforms(&Authorized {
        id: Uuid::new_v4(),
        email: None,
        name: None,
        created_at: now,
        token: AuthorizationToken {
            access: "a".to_string(),
            refresh: "r".to_string(),
            expired_at: now,
            refreshable_until: now,
        },
    });
}

#[test]
fn test_nullable_relations_are_sent_as_explicit_null() {
    let mut random = RandomGenerator::seeded(1);
    let body = SaleCreate::random(&mut random, Uuid::new_v4());
    let json = serde_json::to_value(&body).unwrap();

    assert!(json.as_object().unwrap().contains_key("shopping_mall_section_id"));
    assert_eq!(json["shopping_mall_section_id"], json!(null));
    assert_eq!(json["status"], json!("active"));

    let channel = serde_json::to_value(ChannelCreate::random(&mut random)).unwrap();
    assert_eq!(channel["description"], json!(null));
}

#[test]
fn test_partial_update_omits_absent_fields() {
    let update = SaleUnitUpdate {
        name: Some("Renamed".to_string()),
        real_price: Some(dec!(9900)),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({ "name": "Renamed", "real_price": 9900.0 })
    );
}

#[test]
fn test_prices_travel_as_numbers() {
    let body = SaleUnitCreate {
        name: "Small".to_string(),
        primary: true,
        required: false,
        nominal_price: dec!(1000),
        real_price: dec!(800.5),
        stock_quantity: 3,
    };
    let json = serde_json::to_value(&body).unwrap();
    assert!(json["nominal_price"].is_number());
    assert_eq!(json["real_price"].as_f64(), Some(800.5));
}

#[test]
fn test_search_bodies_flatten_paging() {
    let request = ChannelRequest {
        page: PageRequest::new(2, 10),
        search: Some(ChannelSearch {
            code: Some("spring".to_string()),
            name: None,
        }),
        sort: vec!["-created_at".to_string()],
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "page": 2, "limit": 10, "search": { "code": "spring" }, "sort": ["-created_at"] })
    );

    let empty = OrderRequest::default();
    assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
}

#[test]
fn test_join_bodies_per_role() {
    let mut random = RandomGenerator::seeded(2);
    for role in ActorRole::ALL {
        let body = JoinBody::random(role, &mut random);
        assert_eq!(body.role(), role);
        assert_eq!(body.credentials().is_some(), role.has_credentials());
    }
}

#[test]
fn test_guest_profile_fields_may_be_null() {
    let guest = json!({
        "id": Uuid::new_v4(),
        "email": null,
        "name": null,
        "created_at": Utc::now(),
        "token": {
            "access": "access-token",
            "refresh": "refresh-token",
            "expired_at": Utc::now(),
            "refreshable_until": Utc::now(),
        },
    });

    let violations = Authorized::schema().validate(&guest);
    assert!(violations.is_empty(), "{:?}", violations);
    let parsed: Authorized = serde_json::from_value(guest).unwrap();
    assert_eq!(parsed.email, None);
    assert_eq!(parsed.name, None);
}
