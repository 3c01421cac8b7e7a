pub mod home;
pub mod love_map;
pub mod map_form;
pub mod sections;
pub mod typeahead;
