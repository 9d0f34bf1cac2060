pub mod indexnow;
