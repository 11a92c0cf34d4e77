use dioxus::prelude::*;

use crate::principal::{Credentials, Registration};

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("age must be a whole number, got {0:?}")]
    InvalidAge(String),
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_owned())
}

/// Passwords are taken verbatim; only the other fields are trimmed.
fn required_password(value: &str) -> Result<String, FormError> {
    if value.is_empty() {
        return Err(FormError::Required("Password"));
    }
    Ok(value.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Result<Credentials, FormError> {
        Ok(Credentials::new(
            required(&self.email, "E-mail")?,
            required_password(&self.password)?,
        ))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
}

impl RegistrationForm {
    pub fn registration(&self) -> Result<Registration, FormError> {
        let credentials = Credentials::new(
            required(&self.email, "E-mail")?,
            required_password(&self.password)?,
        );
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let age = required(&self.age, "Age")?;
        let age = age.parse().map_err(|_| FormError::InvalidAge(age))?;

        Ok(Registration {
            credentials,
            first_name,
            last_name,
            age,
        })
    }
}

#[derive(Clone, PartialEq)]
pub enum TextInputType {
    Text(String),
    Email(String),
    Password(String),
    Number(String),
}

#[component]
pub fn TextInput(
    oninput: EventHandler<FormEvent>,
    value: ReadOnlySignal<TextInputType>,
) -> Element {
    let (typ, value_str) = match &*value.read() {
        TextInputType::Text(text) => ("text", text.clone()),
        TextInputType::Email(text) => ("email", text.clone()),
        TextInputType::Password(text) => ("password", text.clone()),
        TextInputType::Number(text) => ("number", text.clone()),
    };

    rsx! {
        div {
            class: "control",
            input {
                class: "input",
                value: "{value_str}",
                "type": typ,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonFlavor {
    Info,
    Success,
    Danger,
}

#[component]
pub fn Button(
    onclick: EventHandler<MouseEvent>,
    flavor: Option<ButtonFlavor>,
    disabled: Option<bool>,
    children: Element,
) -> Element {
    let class = match flavor {
        None => "button",
        Some(ButtonFlavor::Info) => "button is-info",
        Some(ButtonFlavor::Success) => "button is-success",
        Some(ButtonFlavor::Danger) => "button is-danger",
    };

    rsx! {
         button {
             class: class,
             disabled: disabled.unwrap_or(false),
             "type": "button",
             onclick: move |evt| onclick.call(evt),
             { children }
         }
    }
}

#[component]
pub fn Field(label: ReadOnlySignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "field",
            label {
                class: "label",
                "{label}"
            }
            { children }
        }
    }
}
