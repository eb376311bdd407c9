/// worked problems: HCN synthesis, ethylene hydration, shift-feed heating, shift-constant sweep
pub mod equilibrium_examples;
