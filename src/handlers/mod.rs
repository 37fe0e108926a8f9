// Handlers are organized by security tier:
// public (no authentication, visitor + token acquisition routes) and
// protected (JWT required, /api prefix).
pub mod protected;
pub mod public;
