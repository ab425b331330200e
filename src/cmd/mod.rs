pub mod encode;
pub mod inspect;
pub mod keygen;
