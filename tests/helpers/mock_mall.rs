// In-memory shopping-mall backend
//
// Serves the routes the SDK calls, with the same DTOs, so scenarios can run
// end to end inside a test process. Role checks, ownership checks, 404s and
// input validation behave like the real backend; `Faults` switches on
// deliberate misbehaviour so tests can watch the suite catch it.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use mall_e2e::actors::{
    ActorRole, AdminJoin, AuthorizationToken, Authorized, GuestJoin, Login, MemberJoin,
    RefreshRequest, SellerJoin,
};
use mall_e2e::core::{Page, PageRequest, Pagination};
use mall_e2e::modules::carts::{Cart, CartCreate, CartItem, CartItemCreate};
use mall_e2e::modules::channels::{Channel, ChannelCreate, ChannelRequest};
use mall_e2e::modules::orders::{Order, OrderCreate, OrderRequest, OrderStatus};
use mall_e2e::modules::sales::{Sale, SaleCreate, SaleRequest, SaleUnit, SaleUnitCreate, SaleUnitUpdate};
use mall_e2e::modules::scenario::SortDirection;

/// Deliberate backend bugs
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    /// Unit updates answer with the stored unit unchanged
    pub ignore_unit_updates: bool,
    /// Channel responses carry an id that is not a UUID
    pub malformed_channel_ids: bool,
    /// Seller routes let anonymous callers through
    pub open_seller_routes: bool,
}

struct Account {
    role: ActorRole,
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct MallState {
    accounts: HashMap<Uuid, Account>,
    access: HashMap<String, Uuid>,
    refresh: HashMap<String, Uuid>,
    channels: Vec<Channel>,
    sales: Vec<Sale>,
    units: Vec<SaleUnit>,
    carts: Vec<Cart>,
    items: Vec<CartItem>,
    orders: Vec<Order>,
}

pub struct MockMall {
    faults: Faults,
    state: Mutex<MallState>,
}

impl MockMall {
    pub fn new(faults: Faults) -> Self {
        Self {
            faults,
            state: Mutex::new(MallState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MallState> {
        self.state.lock().unwrap()
    }

    /// Number of accounts joined so far, any role
    pub fn account_count(&self) -> usize {
        self.lock().accounts.len()
    }
}

type Mall = web::Data<MockMall>;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/{role}/join", web::post().to(join))
        .route("/auth/{role}/login", web::put().to(login))
        .route("/auth/{role}/refresh", web::put().to(refresh))
        .service(
            web::resource("/shoppingMall/admin/channels")
                .route(web::post().to(create_channel))
                .route(web::patch().to(index_channels)),
        )
        .service(
            web::resource("/shoppingMall/admin/channels/{id}")
                .route(web::get().to(channel_at))
                .route(web::delete().to(erase_channel)),
        )
        .service(
            web::resource("/shoppingMall/seller/sales")
                .route(web::post().to(create_sale))
                .route(web::patch().to(index_sales)),
        )
        .route("/shoppingMall/seller/sales/{id}", web::get().to(sale_at))
        .route(
            "/shoppingMall/admin/sales/{sale_id}/units",
            web::post().to(create_unit),
        )
        .service(
            web::resource("/shoppingMall/admin/sales/{sale_id}/units/{id}")
                .route(web::get().to(unit_at))
                .route(web::put().to(update_unit)),
        )
        .route("/shoppingMall/member/carts", web::post().to(create_cart))
        .service(
            web::resource("/shoppingMall/member/carts/{id}/items")
                .route(web::post().to(add_item))
                .route(web::get().to(cart_items)),
        )
        .service(
            web::resource("/shoppingMall/member/orders")
                .route(web::post().to(create_order))
                .route(web::patch().to(index_orders)),
        )
        .route("/shoppingMall/member/orders/{id}", web::get().to(order_at));
}

fn reject(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "message": message }))
}

fn bearer(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Account id behind the request's token, if it belongs to `role`
fn caller(state: &MallState, req: &HttpRequest, role: ActorRole) -> Result<Uuid, HttpResponse> {
    let token = bearer(req).ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "missing token"))?;
    let id = *state
        .access
        .get(token)
        .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "unknown token"))?;
    match state.accounts.get(&id) {
        Some(account) if account.role == role => Ok(id),
        _ => Err(reject(StatusCode::FORBIDDEN, "role not permitted")),
    }
}

fn issue(state: &mut MallState, id: Uuid) -> Result<Authorized, HttpResponse> {
    let now = Utc::now();
    let token = AuthorizationToken {
        access: format!("access-{}", Uuid::new_v4().simple()),
        refresh: format!("refresh-{}", Uuid::new_v4().simple()),
        expired_at: now + Duration::hours(3),
        refreshable_until: now + Duration::days(14),
    };
    state.access.insert(token.access.clone(), id);
    state.refresh.insert(token.refresh.clone(), id);

    let account = state
        .accounts
        .get(&id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "account"))?;
    Ok(Authorized {
        id,
        email: account.email.clone(),
        name: account.name.clone(),
        created_at: account.created_at,
        token,
    })
}

fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    let current = request.effective_page();
    let limit = request.effective_limit();
    let records = items.len() as u32;
    let skip = (current.max(1) - 1) as usize * limit as usize;

    Page {
        pagination: Pagination {
            current,
            limit,
            records,
            pages: Pagination::expected_pages(records, limit),
        },
        data: items.into_iter().skip(skip).take(limit as usize).collect(),
    }
}

/// Stable multi-key sort; earlier tokens take precedence
fn sort_by_tokens<T, F>(items: &mut [T], tokens: &[String], compare: F)
where
    F: Fn(&T, &T, &str) -> std::cmp::Ordering,
{
    for token in tokens.iter().rev() {
        let Some((direction, field)) = SortDirection::parse_token(token) else {
            continue;
        };
        items.sort_by(|a, b| {
            let ordering = compare(a, b, field);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

fn ok_json<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

async fn join(mall: Mall, role: web::Path<String>, body: web::Json<Value>) -> HttpResponse {
    let Ok(role) = role.parse::<ActorRole>() else {
        return reject(StatusCode::NOT_FOUND, "unknown role");
    };

    let body = body.into_inner();
    let parsed = match role {
        ActorRole::Admin => {
            serde_json::from_value::<AdminJoin>(body).map(|b| Some((b.email, b.password, b.name)))
        }
        ActorRole::Seller => {
            serde_json::from_value::<SellerJoin>(body).map(|b| Some((b.email, b.password, b.name)))
        }
        ActorRole::Member => {
            serde_json::from_value::<MemberJoin>(body).map(|b| Some((b.email, b.password, b.name)))
        }
        ActorRole::Guest => serde_json::from_value::<GuestJoin>(body).map(|_| None),
    };
    let credentials = match parsed {
        Ok(credentials) => credentials,
        Err(err) => return reject(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let mut state = mall.lock();
    let account = match credentials {
        Some((email, password, name)) => {
            if email.is_empty() || password.is_empty() || name.is_empty() {
                return reject(StatusCode::BAD_REQUEST, "empty credential field");
            }
            let taken = state
                .accounts
                .values()
                .any(|a| a.role == role && a.email.as_deref() == Some(email.as_str()));
            if taken {
                return reject(StatusCode::CONFLICT, "email already joined");
            }
            Account {
                role,
                email: Some(email),
                password: Some(password),
                name: Some(name),
                created_at: Utc::now(),
            }
        }
        None => Account {
            role,
            email: None,
            password: None,
            name: None,
            created_at: Utc::now(),
        },
    };

    let id = Uuid::new_v4();
    state.accounts.insert(id, account);
    match issue(&mut state, id) {
        Ok(authorized) => ok_json(StatusCode::CREATED, &authorized),
        Err(response) => response,
    }
}

async fn login(mall: Mall, role: web::Path<String>, body: web::Json<Login>) -> HttpResponse {
    let Ok(role) = role.parse::<ActorRole>() else {
        return reject(StatusCode::NOT_FOUND, "unknown role");
    };

    let mut state = mall.lock();
    let found = state.accounts.iter().find_map(|(id, account)| {
        let matches = account.role == role
            && account.email.as_deref() == Some(body.email.as_str())
            && account.password.as_deref() == Some(body.password.as_str());
        matches.then_some(*id)
    });

    match found {
        Some(id) => match issue(&mut state, id) {
            Ok(authorized) => ok_json(StatusCode::OK, &authorized),
            Err(response) => response,
        },
        None => reject(StatusCode::UNAUTHORIZED, "wrong email or password"),
    }
}

async fn refresh(
    mall: Mall,
    role: web::Path<String>,
    body: web::Json<RefreshRequest>,
) -> HttpResponse {
    let Ok(role) = role.parse::<ActorRole>() else {
        return reject(StatusCode::NOT_FOUND, "unknown role");
    };

    let mut state = mall.lock();
    let Some(id) = state.refresh.get(&body.refresh).copied() else {
        return reject(StatusCode::UNAUTHORIZED, "unknown refresh token");
    };
    if state.accounts.get(&id).map(|a| a.role) != Some(role) {
        return reject(StatusCode::FORBIDDEN, "role not permitted");
    }

    match issue(&mut state, id) {
        Ok(authorized) => ok_json(StatusCode::OK, &authorized),
        Err(response) => response,
    }
}

// ---------------------------------------------------------------------------
// Channels (admin)
// ---------------------------------------------------------------------------

fn render_channel(faults: &Faults, status: StatusCode, channel: &Channel) -> HttpResponse {
    if !faults.malformed_channel_ids {
        return ok_json(status, channel);
    }
    let mut value = serde_json::to_value(channel).unwrap();
    value["id"] = json!("not-a-uuid");
    ok_json(status, &value)
}

async fn create_channel(
    mall: Mall,
    req: HttpRequest,
    body: web::Json<ChannelCreate>,
) -> HttpResponse {
    let mut state = mall.lock();
    if let Err(response) = caller(&state, &req, ActorRole::Admin) {
        return response;
    }
    let body = body.into_inner();
    if body.code.is_empty() || body.name.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "code and name are required");
    }
    if state.channels.iter().any(|c| c.code == body.code) {
        return reject(StatusCode::CONFLICT, "duplicate channel code");
    }

    let now = Utc::now();
    let channel = Channel {
        id: Uuid::new_v4(),
        code: body.code,
        name: body.name,
        description: body.description,
        created_at: now,
        updated_at: now,
    };
    state.channels.push(channel.clone());
    render_channel(&mall.faults, StatusCode::CREATED, &channel)
}

async fn channel_at(mall: Mall, req: HttpRequest, id: web::Path<Uuid>) -> HttpResponse {
    let state = mall.lock();
    if let Err(response) = caller(&state, &req, ActorRole::Admin) {
        return response;
    }
    match state.channels.iter().find(|c| c.id == *id) {
        Some(channel) => render_channel(&mall.faults, StatusCode::OK, channel),
        None => reject(StatusCode::NOT_FOUND, "channel"),
    }
}

async fn index_channels(
    mall: Mall,
    req: HttpRequest,
    body: web::Json<ChannelRequest>,
) -> HttpResponse {
    let state = mall.lock();
    if let Err(response) = caller(&state, &req, ActorRole::Admin) {
        return response;
    }

    let search = body.search.clone().unwrap_or_default();
    let mut channels: Vec<Channel> = state
        .channels
        .iter()
        .filter(|c| search.code.as_ref().map_or(true, |code| c.code.contains(code.as_str())))
        .filter(|c| search.name.as_ref().map_or(true, |name| c.name.contains(name.as_str())))
        .cloned()
        .collect();
    sort_by_tokens(&mut channels, &body.sort, |a, b, field| match field {
        "code" => a.code.cmp(&b.code),
        "name" => a.name.cmp(&b.name),
        _ => a.created_at.cmp(&b.created_at),
    });

    ok_json(StatusCode::OK, &paginate(channels, &body.page))
}

async fn erase_channel(mall: Mall, req: HttpRequest, id: web::Path<Uuid>) -> HttpResponse {
    let mut state = mall.lock();
    if let Err(response) = caller(&state, &req, ActorRole::Admin) {
        return response;
    }
    let before = state.channels.len();
    state.channels.retain(|c| c.id != *id);
    if state.channels.len() == before {
        return reject(StatusCode::NOT_FOUND, "channel");
    }
    HttpResponse::Ok().finish()
}

// ---------------------------------------------------------------------------
// Sales (seller) and sale units (admin)
// ---------------------------------------------------------------------------

async fn create_sale(mall: Mall, req: HttpRequest, body: web::Json<SaleCreate>) -> HttpResponse {
    let mut state = mall.lock();
    let seller_id = match caller(&state, &req, ActorRole::Seller) {
        Ok(id) => id,
        Err(_) if mall.faults.open_seller_routes && bearer(&req).is_none() => Uuid::nil(),
        Err(response) => return response,
    };
    let body = body.into_inner();
    if body.title.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "title is required");
    }
    if !state.channels.iter().any(|c| c.id == body.shopping_mall_channel_id) {
        return reject(StatusCode::NOT_FOUND, "channel");
    }

    let now = Utc::now();
    let sale = Sale {
        id: Uuid::new_v4(),
        shopping_mall_seller_id: seller_id,
        shopping_mall_channel_id: body.shopping_mall_channel_id,
        shopping_mall_section_id: body.shopping_mall_section_id,
        title: body.title,
        description: body.description,
        status: body.status,
        opened_at: body.opened_at,
        closed_at: body.closed_at,
        created_at: now,
        updated_at: now,
    };
    state.sales.push(sale.clone());
    ok_json(StatusCode::CREATED, &sale)
}

async fn sale_at(mall: Mall, req: HttpRequest, id: web::Path<Uuid>) -> HttpResponse {
    let state = mall.lock();
    let seller_id = match caller(&state, &req, ActorRole::Seller) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state
        .sales
        .iter()
        .find(|s| s.id == *id && s.shopping_mall_seller_id == seller_id)
    {
        Some(sale) => ok_json(StatusCode::OK, sale),
        None => reject(StatusCode::NOT_FOUND, "sale"),
    }
}

async fn index_sales(mall: Mall, req: HttpRequest, body: web::Json<SaleRequest>) -> HttpResponse {
    let state = mall.lock();
    let seller_id = match caller(&state, &req, ActorRole::Seller) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let mut sales: Vec<Sale> = state
        .sales
        .iter()
        .filter(|s| s.shopping_mall_seller_id == seller_id)
        .filter(|s| body.status.map_or(true, |status| s.status == status))
        .filter(|s| {
            body.shopping_mall_channel_id
                .map_or(true, |channel| s.shopping_mall_channel_id == channel)
        })
        .cloned()
        .collect();
    sort_by_tokens(&mut sales, &body.sort, |a, b, field| match field {
        "title" => a.title.cmp(&b.title),
        _ => a.created_at.cmp(&b.created_at),
    });

    ok_json(StatusCode::OK, &paginate(sales, &body.page))
}

async fn create_unit(
    mall: Mall,
    req: HttpRequest,
    sale_id: web::Path<Uuid>,
    body: web::Json<SaleUnitCreate>,
) -> HttpResponse {
    let mut state = mall.lock();
    if let Err(response) = caller(&state, &req, ActorRole::Admin) {
        return response;
    }
    if !state.sales.iter().any(|s| s.id == *sale_id) {
        return reject(StatusCode::NOT_FOUND, "sale");
    }
    let body = body.into_inner();
    if body.name.is_empty() || body.stock_quantity < 0 || body.real_price > body.nominal_price {
        return reject(StatusCode::BAD_REQUEST, "invalid sale unit");
    }

    let now = Utc::now();
    let unit = SaleUnit {
        id: Uuid::new_v4(),
        shopping_mall_sale_id: *sale_id,
        name: body.name,
        primary: body.primary,
        required: body.required,
        nominal_price: body.nominal_price,
        real_price: body.real_price,
        stock_quantity: body.stock_quantity,
        created_at: now,
        updated_at: now,
    };
    state.units.push(unit.clone());
    ok_json(StatusCode::CREATED, &unit)
}

async fn unit_at(mall: Mall, req: HttpRequest, path: web::Path<(Uuid, Uuid)>) -> HttpResponse {
    let state = mall.lock();
    if let Err(response) = caller(&state, &req, ActorRole::Admin) {
        return response;
    }
    let (sale_id, id) = path.into_inner();
    match state
        .units
        .iter()
        .find(|u| u.id == id && u.shopping_mall_sale_id == sale_id)
    {
        Some(unit) => ok_json(StatusCode::OK, unit),
        None => reject(StatusCode::NOT_FOUND, "sale unit"),
    }
}

async fn update_unit(
    mall: Mall,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<SaleUnitUpdate>,
) -> HttpResponse {
    let mut state = mall.lock();
    if let Err(response) = caller(&state, &req, ActorRole::Admin) {
        return response;
    }
    let (sale_id, id) = path.into_inner();
    let ignore = mall.faults.ignore_unit_updates;
    let Some(unit) = state
        .units
        .iter_mut()
        .find(|u| u.id == id && u.shopping_mall_sale_id == sale_id)
    else {
        return reject(StatusCode::NOT_FOUND, "sale unit");
    };

    if !ignore {
        let body = body.into_inner();
        if let Some(name) = body.name {
            unit.name = name;
        }
        if let Some(primary) = body.primary {
            unit.primary = primary;
        }
        if let Some(required) = body.required {
            unit.required = required;
        }
        if let Some(nominal_price) = body.nominal_price {
            unit.nominal_price = nominal_price;
        }
        if let Some(real_price) = body.real_price {
            unit.real_price = real_price;
        }
        if let Some(stock_quantity) = body.stock_quantity {
            unit.stock_quantity = stock_quantity;
        }
        unit.updated_at = Utc::now();
    }
    ok_json(StatusCode::OK, unit)
}

// ---------------------------------------------------------------------------
// Carts and orders (member)
// ---------------------------------------------------------------------------

async fn create_cart(mall: Mall, req: HttpRequest, _body: web::Json<CartCreate>) -> HttpResponse {
    let mut state = mall.lock();
    let member_id = match caller(&state, &req, ActorRole::Member) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cart = Cart {
        id: Uuid::new_v4(),
        shopping_mall_member_id: member_id,
        created_at: Utc::now(),
    };
    state.carts.push(cart.clone());
    ok_json(StatusCode::CREATED, &cart)
}

/// The caller's own cart; another member's cart is indistinguishable from a
/// missing one
fn own_cart(state: &MallState, member_id: Uuid, cart_id: Uuid) -> Result<Cart, HttpResponse> {
    state
        .carts
        .iter()
        .find(|c| c.id == cart_id && c.shopping_mall_member_id == member_id)
        .cloned()
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "cart"))
}

async fn add_item(
    mall: Mall,
    req: HttpRequest,
    cart_id: web::Path<Uuid>,
    body: web::Json<CartItemCreate>,
) -> HttpResponse {
    let mut state = mall.lock();
    let cart = match caller(&state, &req, ActorRole::Member)
        .and_then(|member_id| own_cart(&state, member_id, *cart_id))
    {
        Ok(cart) => cart,
        Err(response) => return response,
    };
    if body.quantity < 1 {
        return reject(StatusCode::BAD_REQUEST, "quantity must be positive");
    }
    if !state.units.iter().any(|u| u.id == body.shopping_mall_sale_unit_id) {
        return reject(StatusCode::NOT_FOUND, "sale unit");
    }

    let item = CartItem {
        id: Uuid::new_v4(),
        shopping_mall_cart_id: cart.id,
        shopping_mall_sale_unit_id: body.shopping_mall_sale_unit_id,
        quantity: body.quantity,
        created_at: Utc::now(),
    };
    state.items.push(item.clone());
    ok_json(StatusCode::CREATED, &item)
}

async fn cart_items(mall: Mall, req: HttpRequest, cart_id: web::Path<Uuid>) -> HttpResponse {
    let state = mall.lock();
    let cart = match caller(&state, &req, ActorRole::Member)
        .and_then(|member_id| own_cart(&state, member_id, *cart_id))
    {
        Ok(cart) => cart,
        Err(response) => return response,
    };
    let items: Vec<&CartItem> = state
        .items
        .iter()
        .filter(|i| i.shopping_mall_cart_id == cart.id)
        .collect();
    ok_json(StatusCode::OK, &items)
}

async fn create_order(mall: Mall, req: HttpRequest, body: web::Json<OrderCreate>) -> HttpResponse {
    let mut state = mall.lock();
    let member_id = match caller(&state, &req, ActorRole::Member) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cart = match own_cart(&state, member_id, body.shopping_mall_cart_id) {
        Ok(cart) => cart,
        Err(response) => return response,
    };
    let body = body.into_inner();
    if body.address.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "address is required");
    }

    let lines: Vec<Decimal> = state
        .items
        .iter()
        .filter(|i| i.shopping_mall_cart_id == cart.id)
        .filter_map(|item| {
            state
                .units
                .iter()
                .find(|u| u.id == item.shopping_mall_sale_unit_id)
                .map(|unit| unit.real_price * Decimal::from(item.quantity))
        })
        .collect();
    if lines.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "cart is empty");
    }

    let now = Utc::now();
    let order = Order {
        id: Uuid::new_v4(),
        shopping_mall_member_id: member_id,
        shopping_mall_cart_id: cart.id,
        status: OrderStatus::Pending,
        total_price: lines.into_iter().sum(),
        address: body.address,
        memo: body.memo,
        created_at: now,
        updated_at: now,
    };
    state.orders.push(order.clone());
    ok_json(StatusCode::CREATED, &order)
}

async fn order_at(mall: Mall, req: HttpRequest, id: web::Path<Uuid>) -> HttpResponse {
    let state = mall.lock();
    let member_id = match caller(&state, &req, ActorRole::Member) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state
        .orders
        .iter()
        .find(|o| o.id == *id && o.shopping_mall_member_id == member_id)
    {
        Some(order) => ok_json(StatusCode::OK, order),
        None => reject(StatusCode::NOT_FOUND, "order"),
    }
}

async fn index_orders(mall: Mall, req: HttpRequest, body: web::Json<OrderRequest>) -> HttpResponse {
    let state = mall.lock();
    let member_id = match caller(&state, &req, ActorRole::Member) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let mut orders: Vec<Order> = state
        .orders
        .iter()
        .filter(|o| o.shopping_mall_member_id == member_id)
        .filter(|o| body.status.map_or(true, |status| o.status == status))
        .cloned()
        .collect();
    sort_by_tokens(&mut orders, &body.sort, |a, b, _| a.created_at.cmp(&b.created_at));

    ok_json(StatusCode::OK, &paginate(orders, &body.page))
}
