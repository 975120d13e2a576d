//! The shared create/edit user form.
//!
//! [`use_user_form`] wires a [`FormState`] to the running app: keystrokes are
//! filtered and stored at once, validation waits for the configured quiet
//! period, blur validates immediately, and submit validates everything before
//! a single backend call. [`UserForm`] renders it.
//!
//! The sequencing lives in [`FormDriver`]; this module keeps its state in
//! signals and spawns its tasks on the form's own scope, so they are dropped
//! with the form and never write into a form that has gone away.

use std::future::Future;

use api::{Backend, StoredUser};
use dioxus::core::Task;
use dioxus::prelude::*;
use forms::{Cancel, Field, FormMode, FormPhase, FormState, FrontendConfig};

use crate::backend::{use_backend, use_frontend_config};
use crate::components::{Button, ButtonVariant, Input, Label};
use crate::form_driver::{FormDriver, FormHost, FormTasks};
use crate::icons::FaCircleExclamation;
use crate::Icon;

/// A debounce timer or submission spawned on the form's scope.
pub struct ScheduledTask(Task);

impl Cancel for ScheduledTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// Form state and tasks kept in signals.
#[derive(Clone, Copy)]
struct SignalHost {
    form: Signal<FormState>,
    tasks: Signal<FormTasks<ScheduledTask>>,
}

impl FormHost for SignalHost {
    type Handle = ScheduledTask;

    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        let mut form = self.form;
        form.with_mut(f)
    }

    fn with_tasks<R>(&self, f: impl FnOnce(&mut FormTasks<ScheduledTask>) -> R) -> R {
        let mut tasks = self.tasks;
        tasks.with_mut(f)
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) -> ScheduledTask {
        ScheduledTask(spawn(task))
    }
}

/// Copyable handle to a mounted user form.
#[derive(Clone, Copy)]
pub struct UserFormHandle {
    host: SignalHost,
    mode: Signal<FormMode>,
    backend: Signal<Backend>,
    config: Signal<FrontendConfig>,
    on_saved: EventHandler<StoredUser>,
}

impl UserFormHandle {
    pub fn form(&self) -> Signal<FormState> {
        self.host.form
    }

    fn driver(&self) -> FormDriver<SignalHost, Backend> {
        FormDriver::new(
            self.host,
            self.backend.peek().clone(),
            self.mode.peek().clone(),
            self.config.peek().debounce(),
        )
    }

    /// A keystroke in `field`.
    pub fn input(&self, field: Field, raw: String) {
        self.driver().input(field, &raw);
    }

    /// `field` lost focus.
    pub fn blur(&self, field: Field) {
        self.driver().blur(field);
    }

    /// Validate everything and, when clean, send the record.
    pub fn submit(&self) {
        let on_saved = self.on_saved;
        self.driver().submit(move |stored| on_saved.call(stored));
    }
}

/// Mount form state for `mode`. Edit forms fetch their record on mount and
/// again whenever `mode` changes to another record.
pub fn use_user_form(mode: FormMode, on_saved: EventHandler<StoredUser>) -> UserFormHandle {
    let backend = use_backend();
    let config = use_frontend_config();
    let mut mode_signal = use_signal(|| mode.clone());
    let host = SignalHost {
        form: use_signal(|| FormState::for_mode(&mode)),
        tasks: use_signal(FormTasks::<ScheduledTask>::new),
    };
    let handle = UserFormHandle {
        host,
        mode: mode_signal,
        backend,
        config,
        on_saved,
    };

    // Same component, different route parameters: start over.
    if *mode_signal.peek() != mode {
        mode_signal.set(mode);
        handle.driver().reset();
    }

    let _loader = use_resource(move || {
        let mode = mode_signal();
        let driver = FormDriver::new(
            host,
            backend.peek().clone(),
            mode,
            config.peek().debounce(),
        );
        async move { driver.load().await }
    });

    handle
}

struct FieldMeta {
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    hint: Option<&'static str>,
}

fn field_meta(field: Field) -> FieldMeta {
    match field {
        Field::Name => FieldMeta {
            label: "Name",
            placeholder: "Enter your name",
            input_type: "text",
            hint: None,
        },
        Field::Username => FieldMeta {
            label: "Username",
            placeholder: "Enter your username",
            input_type: "text",
            hint: Some("3-20 characters, letters, numbers, and underscores only"),
        },
        Field::Email => FieldMeta {
            label: "E-mail",
            placeholder: "Enter your e-mail address",
            input_type: "email",
            hint: None,
        },
    }
}

/// One labelled input with its inline error.
#[component]
pub fn FormField(
    field: Field,
    value: String,
    error: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let meta = field_meta(field);
    let id = format!("user-{field}");
    let invalid = !error.is_empty();

    rsx! {
        div {
            class: "form-field",
            Label { html_for: id.clone(), "{meta.label}" }
            Input {
                id: id,
                name: field.as_str().to_string(),
                r#type: meta.input_type.to_string(),
                placeholder: meta.placeholder.to_string(),
                value: value,
                invalid: invalid,
                disabled: disabled,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
                onblur: move |_| onblur.call(()),
            }
            if invalid {
                p { class: "form-field__error", "{error}" }
            }
            if let Some(hint) = meta.hint {
                p { class: "form-field__hint", "{hint}" }
            }
        }
    }
}

/// Create or edit form for a user.
///
/// `children` are rendered next to the submit button; platforms put their
/// cancel link there.
#[component]
pub fn UserForm(
    mode: FormMode,
    title: String,
    #[props(default = "Submit".to_string())] submit_label: String,
    on_saved: EventHandler<StoredUser>,
    children: Element,
) -> Element {
    let handle = use_user_form(mode, on_saved);

    let form = handle.form();
    let state = form.read();
    let loading = *state.phase() == FormPhase::Loading;
    let submitting = *state.phase() == FormPhase::Submitting;
    let busy = state.is_busy();
    let banner = state.phase().banner().map(str::to_string);
    let fields: Vec<(Field, String, String)> = Field::ALL
        .into_iter()
        .map(|f| (f, state.value(f).to_string(), state.error(f).to_string()))
        .collect();
    drop(state);

    rsx! {
        div {
            class: "form-page",
            div {
                class: "form-card",
                h2 { class: "form-card__title", "{title}" }

                if let Some(message) = banner {
                    div {
                        class: "form-banner",
                        role: "alert",
                        Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                        span { "{message}" }
                    }
                }

                if loading {
                    p { class: "form-status", "Loading user..." }
                }

                form {
                    class: "user-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        handle.submit();
                    },

                    for (field, value, error) in fields {
                        FormField {
                            key: "{field}",
                            field: field,
                            value: value,
                            error: error,
                            disabled: loading,
                            oninput: move |raw: String| handle.input(field, raw),
                            onblur: move |_| handle.blur(field),
                        }
                    }

                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: busy,
                            if submitting { "Saving..." } else { "{submit_label}" }
                        }
                        {children}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_label() {
        for field in Field::ALL {
            let meta = field_meta(field);
            assert!(!meta.label.is_empty());
            assert!(!meta.placeholder.is_empty());
        }
        assert_eq!(field_meta(Field::Email).input_type, "email");
        assert!(field_meta(Field::Username).hint.is_some());
    }
}
