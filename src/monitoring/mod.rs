/*!
 * Monitoring
 * Structured tracing for the generator binary
 */

mod tracer;

pub use tracer::init_tracing;
