//! Request execution: one sequential runner per worker, fanned out concurrently.
mod distributor;
mod runner;
mod transport;


pub use distributor::{DistributedRun, WorkDistributor, WorkerBatch};
pub use runner::RequestRunner;
pub use transport::{ReqwestTransport, Transport, TransportSettings, reqwest_transport_factory};
