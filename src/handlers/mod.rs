// Two handler tiers:
// Public (no auth) -> tenant render surfaces and platform pages
// Protected (JWT auth) -> domain management under /api/*
pub mod protected;
pub mod public;
