/*
[INPUT]:  HEVA backend payload shapes
[OUTPUT]: Profiles, stories, ledger entries and request bodies
[POS]:    Data layer - wire types shared by client, session and guard
[UPDATE]: When the backend adds fields or new resource types
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
