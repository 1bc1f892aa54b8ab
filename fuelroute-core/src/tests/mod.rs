//! Behaviour scenarios for the route calculator.
