#[cfg(test)]
mod common_ui;

#[cfg(test)]
mod composer_property_tests;


#[cfg(test)]
mod handler_passthrough_tests;

#[cfg(test)]
mod prop_validation_tests;
