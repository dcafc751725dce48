mod area_code;
mod sex;

pub use area_code::AreaCode;
pub use sex::{DogSex, DogSexVocabulary};
