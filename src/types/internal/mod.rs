// Internal types shared between the API and store layers
pub mod item;
