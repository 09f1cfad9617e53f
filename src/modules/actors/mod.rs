// Actors module

pub mod api;
pub mod models;
pub mod provisioner;

pub use models::{
    ActorRole, AdminJoin, AuthorizationToken, Authorized, GuestJoin, JoinBody, Login,
    MemberJoin, RefreshRequest, SellerJoin,
};
pub use provisioner::{ActorProvisioner, ActorSession};
