pub mod firebase;

pub use firebase::FirebaseIdentity;
