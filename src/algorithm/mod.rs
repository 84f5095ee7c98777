/// Border ring synthesis
pub mod border;
/// Start, body and end codes for finished paths
pub mod codes;
/// Flood-fill reachability checks
pub mod connectivity;
/// Generation entry point and orchestration
pub mod executor;
/// Obstacle path growth
pub mod growth;
/// Spawn point selection along the border
pub mod spawn;
