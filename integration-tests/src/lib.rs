//! End-to-end tests of the launcher against a simulated Osmosis chain. The tests live in `tests/`.
