/// Dense representation, storing every coefficient
pub mod dense;
