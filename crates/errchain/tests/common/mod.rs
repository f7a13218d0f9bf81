#![allow(dead_code)]

use errchain::{Exception, Reconstruct, Thrown};
use tracing_subscriber::EnvFilter;

errchain::exception!(pub struct DomainError);
errchain::exception!(pub struct InfraError { code: 503 });
errchain::exception!(pub struct OtherError);
errchain::exception!(pub struct ValidationError { code: 422 });

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_test_writer()
        .try_init();
}

/// `depth` nodes, alternating kinds, outermost first: `n0` wraps `n1` ...
pub fn chain_of(depth: usize) -> Thrown {
    assert!(depth >= 1);
    let mut current: Thrown = InfraError::new(format!("n{}", depth - 1)).into();
    for index in (0..depth - 1).rev() {
        let message = format!("n{index}");
        current = if index % 2 == 0 {
            DomainError::new(message).wrap(current).into()
        } else {
            InfraError::new(message).wrap(current).into()
        };
    }
    current
}

pub fn messages(nodes: &[&dyn Exception]) -> Vec<String> {
    nodes.iter().map(|n| n.message().to_string()).collect()
}
