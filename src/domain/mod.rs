// Domain layer: the request/parameter entities owned by an upstream
// collaborator. This crate only reads them.

pub mod model;
