//! Shared test utilities for sqlpath-mapping unit tests.
