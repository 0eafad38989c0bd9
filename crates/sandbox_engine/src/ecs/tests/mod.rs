//! Pool-level integration tests: integration, collision tinting and draws
//! working together through `EntityPool::tick`.
