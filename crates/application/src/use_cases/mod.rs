pub mod dns;

pub use dns::{DispatchOutcome, HandleDnsQueryUseCase, QueryAnswer};
