pub mod profile;

pub use profile::{sample_profiles, Profile, SampleProfile};
