use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{DeclaredSchema, RandomGenerator, Schema, StringFormat};

/// Authenticated role identities of the mall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Admin,
    Seller,
    Member,
    Guest,
}

impl ActorRole {
    pub const ALL: [ActorRole; 4] = [
        ActorRole::Admin,
        ActorRole::Seller,
        ActorRole::Member,
        ActorRole::Guest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Admin => "admin",
            ActorRole::Seller => "seller",
            ActorRole::Member => "member",
            ActorRole::Guest => "guest",
        }
    }

    /// Guests join anonymously and cannot log back in
    pub fn has_credentials(&self) -> bool {
        !matches!(self, ActorRole::Guest)
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActorRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin" => Ok(ActorRole::Admin),
            "seller" => Ok(ActorRole::Seller),
            "member" => Ok(ActorRole::Member),
            "guest" => Ok(ActorRole::Guest),
            _ => Err(format!("Invalid actor role: {}", s)),
        }
    }
}

/// Access/refresh token pair issued on join, login and refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationToken {
    pub access: String,
    pub refresh: String,
    pub expired_at: DateTime<Utc>,
    pub refreshable_until: DateTime<Utc>,
}

impl DeclaredSchema for AuthorizationToken {
    fn schema() -> Schema {
        Schema::object("IAuthorizationToken")
            .property("access", Schema::string().length(1, 4096))
            .property("refresh", Schema::string().length(1, 4096))
            .property("expired_at", Schema::date_time())
            .property("refreshable_until", Schema::date_time())
    }
}

/// Identity record returned by every authentication operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorized {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub token: AuthorizationToken,
}

impl DeclaredSchema for Authorized {
    fn schema() -> Schema {
        Schema::object("IShoppingMallActor.IAuthorized")
            .property("id", Schema::uuid())
            .optional_property("email", Schema::format(StringFormat::Email).nullable())
            .optional_property("name", Schema::string().nullable())
            .property("created_at", Schema::date_time())
            .property("token", AuthorizationToken::schema())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminJoin {
    pub email: String,
    pub password: String,
    pub name: String,
    pub nickname: Option<String>,
}

impl AdminJoin {
    pub fn random(random: &mut RandomGenerator) -> Self {
        Self {
            email: random.email(),
            password: random.alphanumeric(12),
            name: random.paragraph(2),
            nickname: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerJoin {
    pub email: String,
    pub password: String,
    pub name: String,
    pub mobile: String,
    pub business_registration_number: Option<String>,
    pub status: String,
}

impl SellerJoin {
    pub fn random(random: &mut RandomGenerator) -> Self {
        Self {
            email: random.email(),
            password: random.alphanumeric(12),
            name: random.paragraph(2),
            mobile: random.mobile(),
            business_registration_number: None,
            status: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberJoin {
    pub email: String,
    pub password: String,
    pub name: String,
    pub mobile: Option<String>,
    pub status: String,
}

impl MemberJoin {
    pub fn random(random: &mut RandomGenerator) -> Self {
        Self {
            email: random.email(),
            password: random.alphanumeric(12),
            name: random.paragraph(2),
            mobile: Some(random.mobile()),
            status: "active".to_string(),
        }
    }
}

/// Guests join without credentials; the visit context may be unknown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestJoin {
    pub href: Option<String>,
    pub referrer: Option<String>,
}

impl GuestJoin {
    pub fn random(random: &mut RandomGenerator) -> Self {
        Self {
            href: Some(format!("https://{}.com/", random.alphabets(8))),
            referrer: None,
        }
    }
}

/// Join request for any role
#[derive(Debug, Clone, PartialEq)]
pub enum JoinBody {
    Admin(AdminJoin),
    Seller(SellerJoin),
    Member(MemberJoin),
    Guest(GuestJoin),
}

impl JoinBody {
    pub fn random(role: ActorRole, random: &mut RandomGenerator) -> Self {
        match role {
            ActorRole::Admin => JoinBody::Admin(AdminJoin::random(random)),
            ActorRole::Seller => JoinBody::Seller(SellerJoin::random(random)),
            ActorRole::Member => JoinBody::Member(MemberJoin::random(random)),
            ActorRole::Guest => JoinBody::Guest(GuestJoin::random(random)),
        }
    }

    pub fn role(&self) -> ActorRole {
        match self {
            JoinBody::Admin(_) => ActorRole::Admin,
            JoinBody::Seller(_) => ActorRole::Seller,
            JoinBody::Member(_) => ActorRole::Member,
            JoinBody::Guest(_) => ActorRole::Guest,
        }
    }

    pub fn credentials(&self) -> Option<Login> {
        let (email, password) = match self {
            JoinBody::Admin(body) => (&body.email, &body.password),
            JoinBody::Seller(body) => (&body.email, &body.password),
            JoinBody::Member(body) => (&body.email, &body.password),
            JoinBody::Guest(_) => return None,
        };
        Some(Login {
            email: email.clone(),
            password: password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}
