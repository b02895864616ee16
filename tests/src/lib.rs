//! End-to-end scenarios for the MAC change flow, run against a fake command runner.

mod apply;
