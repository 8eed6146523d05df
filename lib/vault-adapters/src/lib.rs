pub mod pool;
pub mod token;
pub mod validator;
pub mod whitelist;
