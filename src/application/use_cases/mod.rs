/// Use cases module containing application business logic orchestration
mod check_baseline;

pub use check_baseline::CheckBaselineUseCase;
