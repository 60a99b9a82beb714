pub use cb_entities::{
    email::*, event::*, id::*, official::*, organization::*, password::*, rsvp::*, time::*,
    user::*,
};
