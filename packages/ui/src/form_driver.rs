//! Event handling for a mounted user form, independent of where its state
//! lives.
//!
//! [`FormDriver`] turns keystrokes, blurs, submits and the initial load into
//! [`FormState`] transitions and scheduled tasks. The host decides how state
//! is stored and how tasks are spawned: signals and scope tasks in the app,
//! plain cells and local tasks in tests.

use std::future::Future;
use std::time::Duration;

use api::{StoredUser, UserService};
use forms::{Cancel, Field, FormMode, FormState, TimerSlots};
use tracing::debug;

use crate::timer::sleep;

/// Tasks a form owns: one debounce timer per field and at most one
/// submission in flight.
pub struct FormTasks<H: Cancel> {
    timers: TimerSlots<H>,
    submission: Option<H>,
}

impl<H: Cancel> Default for FormTasks<H> {
    fn default() -> Self {
        Self {
            timers: TimerSlots::new(),
            submission: None,
        }
    }
}

impl<H: Cancel> FormTasks<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scheduled(&self, field: Field) -> bool {
        self.timers.is_scheduled(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_some()
    }

    pub fn cancel_all(&mut self) {
        self.timers.cancel_all();
        if let Some(task) = self.submission.take() {
            task.cancel();
        }
    }
}

impl<H: Cancel> Drop for FormTasks<H> {
    fn drop(&mut self) {
        if let Some(task) = self.submission.take() {
            task.cancel();
        }
    }
}

/// Storage and task spawning for one form.
pub trait FormHost: Clone + 'static {
    type Handle: Cancel;

    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R;

    fn with_tasks<R>(&self, f: impl FnOnce(&mut FormTasks<Self::Handle>) -> R) -> R;

    fn spawn(&self, task: impl Future<Output = ()> + 'static) -> Self::Handle;
}

/// Drives one form against one backend.
#[derive(Clone)]
pub struct FormDriver<H, S> {
    host: H,
    service: S,
    mode: FormMode,
    debounce: Duration,
}

impl<H, S> FormDriver<H, S>
where
    H: FormHost,
    S: UserService + Clone + 'static,
{
    pub fn new(host: H, service: S, mode: FormMode, debounce: Duration) -> Self {
        Self {
            host,
            service,
            mode,
            debounce,
        }
    }

    /// A keystroke in `field`: store the filtered value now, validate once
    /// the field has been quiet for the debounce delay.
    pub fn input(&self, field: Field, raw: &str) {
        let pending = self.host.with_form(|form| form.input(field, raw));
        let host = self.host.clone();
        let delay = self.debounce;
        let timer = self.host.spawn(async move {
            sleep(delay).await;
            host.with_tasks(|tasks| tasks.timers.release(field));
            host.with_form(|form| form.settle(pending));
        });
        self.host.with_tasks(|tasks| tasks.timers.replace(field, timer));
    }

    /// `field` lost focus: drop its timer and validate right away.
    pub fn blur(&self, field: Field) {
        self.host.with_tasks(|tasks| tasks.timers.cancel(field));
        self.host.with_form(|form| form.blur(field));
    }

    /// Validate everything and, when clean, save in the background.
    /// `on_saved` runs after a successful save.
    ///
    /// Returns `false` when nothing was sent.
    pub fn submit(&self, on_saved: impl FnOnce(StoredUser) + 'static) -> bool {
        self.host.with_tasks(|tasks| tasks.timers.cancel_all());
        let record = match self.host.with_form(|form| form.begin_submit()) {
            Ok(record) => record,
            Err(rejected) => {
                debug!("submission not sent: {rejected}");
                return false;
            }
        };

        let host = self.host.clone();
        let service = self.service.clone();
        let mode = self.mode.clone();
        let task = self.host.spawn(async move {
            let result = api::save(&service, &mode, &record).await;
            host.with_tasks(|tasks| tasks.submission.take());
            let outcome = result.as_ref().map(|_| ()).map_err(String::clone);
            host.with_form(|form| form.finish_submit(outcome));
            if let Ok(stored) = result {
                on_saved(stored);
            }
        });
        self.host.with_tasks(|tasks| tasks.submission = Some(task));
        true
    }

    /// Fetch the record an edit form starts from. Create forms have nothing
    /// to load.
    pub async fn load(&self) {
        let FormMode::Edit(id) = &self.mode else {
            return;
        };
        self.host.with_form(|form| form.begin_load());
        let result = api::load(&self.service, id).await;
        self.host.with_form(|form| form.finish_load(result));
    }

    /// Start over for this driver's mode, cancelling timers and any
    /// submission still in flight.
    pub fn reset(&self) {
        self.host.with_tasks(|tasks| tasks.cancel_all());
        self.host.with_form(|form| *form = FormState::for_mode(&self.mode));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::{Backend, Call, MemoryUserService};
    use forms::{FormPhase, UserId, UserRecord};
    use tokio::task::{JoinHandle, LocalSet};

    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(300);

    struct LocalTask(JoinHandle<()>);

    impl Cancel for LocalTask {
        fn cancel(self) {
            self.0.abort();
        }
    }

    #[derive(Clone)]
    struct LocalHost {
        form: Rc<RefCell<FormState>>,
        tasks: Rc<RefCell<FormTasks<LocalTask>>>,
    }

    impl LocalHost {
        fn new(mode: &FormMode) -> Self {
            Self {
                form: Rc::new(RefCell::new(FormState::for_mode(mode))),
                tasks: Rc::new(RefCell::new(FormTasks::new())),
            }
        }

        fn error(&self, field: Field) -> String {
            self.form.borrow().error(field).to_string()
        }

        fn phase(&self) -> FormPhase {
            self.form.borrow().phase().clone()
        }
    }

    impl FormHost for LocalHost {
        type Handle = LocalTask;

        fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
            f(&mut self.form.borrow_mut())
        }

        fn with_tasks<R>(&self, f: impl FnOnce(&mut FormTasks<LocalTask>) -> R) -> R {
            f(&mut self.tasks.borrow_mut())
        }

        fn spawn(&self, task: impl Future<Output = ()> + 'static) -> LocalTask {
            LocalTask(tokio::task::spawn_local(task))
        }
    }

    fn driver(mode: FormMode) -> (FormDriver<LocalHost, Backend>, LocalHost, MemoryUserService) {
        let service = MemoryUserService::new();
        let host = LocalHost::new(&mode);
        let driver = FormDriver::new(
            host.clone(),
            Backend::Memory(service.clone()),
            mode,
            DEBOUNCE,
        );
        (driver, host, service)
    }

    /// Collects what `on_saved` receives.
    fn recorder() -> (Rc<RefCell<Vec<StoredUser>>>, impl FnOnce(StoredUser) + 'static) {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&saved);
        (saved, move |stored| sink.borrow_mut().push(stored))
    }

    /// Let the clock run `ms` forward; spawned tasks run on the way.
    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_burst_validates_once_after_quiet_period() {
        LocalSet::new()
            .run_until(async {
                let (driver, host, _) = driver(FormMode::Create);

                driver.input(Field::Username, "j");
                wait(100).await;
                driver.input(Field::Username, "jo");
                wait(100).await;
                driver.input(Field::Username, "jo!");
                assert_eq!(host.form.borrow().value(Field::Username), "jo");
                assert!(host.tasks.borrow().is_scheduled(Field::Username));

                // The first two timers would have fired by now.
                wait(299).await;
                assert_eq!(host.error(Field::Username), "");

                wait(2).await;
                assert_eq!(
                    host.error(Field::Username),
                    "Username should be at least 3 characters long"
                );
                assert!(!host.tasks.borrow().is_scheduled(Field::Username));
                assert!(!host.form.borrow().is_pending(Field::Username));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_clears_error_until_next_validation() {
        LocalSet::new()
            .run_until(async {
                let (driver, host, _) = driver(FormMode::Create);

                driver.blur(Field::Name);
                assert_eq!(host.error(Field::Name), "Name is required");

                driver.input(Field::Name, "J");
                assert_eq!(host.error(Field::Name), "");

                wait(301).await;
                assert_eq!(
                    host.error(Field::Name),
                    "Name should be at least 2 characters long"
                );
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_blur_cancels_timer_and_validates_immediately() {
        LocalSet::new()
            .run_until(async {
                let (driver, host, _) = driver(FormMode::Create);

                driver.input(Field::Username, "jo");
                wait(100).await;
                driver.blur(Field::Username);

                assert!(!host.tasks.borrow().is_scheduled(Field::Username));
                assert_eq!(
                    host.error(Field::Username),
                    "Username should be at least 3 characters long"
                );

                // Typing again replaces the blur error until the next timer.
                driver.input(Field::Username, "joe");
                assert_eq!(host.error(Field::Username), "");
                wait(1_000).await;
                assert_eq!(host.error(Field::Username), "");
                assert!(!host.form.borrow().is_pending(Field::Username));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_create_is_blocked_without_a_call() {
        LocalSet::new()
            .run_until(async {
                let (driver, host, service) = driver(FormMode::Create);
                let (saved, on_saved) = recorder();

                driver.input(Field::Name, "Jo");
                driver.input(Field::Username, "jo");
                driver.input(Field::Email, "");

                assert!(!driver.submit(on_saved));
                wait(1_000).await;

                assert_eq!(host.phase(), FormPhase::Blocked);
                assert_eq!(host.error(Field::Name), "");
                assert_eq!(
                    host.error(Field::Username),
                    "Username should be at least 3 characters long"
                );
                assert_eq!(host.error(Field::Email), "");
                assert!(service.calls().is_empty());
                assert!(saved.borrow().is_empty());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_create_saves_once_and_reports_saved_user() {
        LocalSet::new()
            .run_until(async {
                let (driver, host, service) = driver(FormMode::Create);
                let (saved, on_saved) = recorder();

                driver.input(Field::Name, "Ada Lovelace");
                driver.input(Field::Username, "Ada_L");
                driver.input(Field::Email, "ada@gmail.com");

                assert!(driver.submit(on_saved));
                // In flight: the submit button is disabled and a second
                // submit is refused.
                assert_eq!(host.phase(), FormPhase::Submitting);
                assert!(host.form.borrow().is_busy());
                assert!(host.tasks.borrow().is_submitting());
                assert!(!driver.submit(|_| {}));

                wait(1).await;

                let expected = UserRecord::new("Ada Lovelace", "ada_l", "ada@gmail.com");
                assert_eq!(service.calls(), vec![Call::Create(expected.clone())]);
                assert_eq!(host.phase(), FormPhase::Done);
                assert!(!host.tasks.borrow().is_submitting());
                assert_eq!(
                    *saved.borrow(),
                    vec![StoredUser {
                        id: Some(UserId::new("1")),
                        record: expected,
                    }]
                );
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_create_keeps_values_for_retry() {
        LocalSet::new()
            .run_until(async {
                let (driver, host, service) = driver(FormMode::Create);
                let (saved, on_saved) = recorder();
                service.fail_with_status(Some(503));

                driver.input(Field::Name, "Ada");
                driver.input(Field::Username, "ada");
                assert!(driver.submit(on_saved));
                wait(1).await;

                assert_eq!(
                    host.phase(),
                    FormPhase::Failed("the server responded with status 503".to_string())
                );
                assert_eq!(host.form.borrow().record(), &UserRecord::new("Ada", "ada", ""));
                assert!(saved.borrow().is_empty());

                service.fail_with_status(None);
                let (saved, on_saved) = recorder();
                assert!(driver.submit(on_saved));
                wait(1).await;
                assert_eq!(host.phase(), FormPhase::Done);
                assert_eq!(saved.borrow().len(), 1);
                assert_eq!(service.calls().len(), 2);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_loads_then_updates() {
        LocalSet::new()
            .run_until(async {
                let service = MemoryUserService::new();
                let id = service.insert(UserRecord::new("Grace", "grace", "grace@yahoo.com"));
                let mode = FormMode::Edit(id.clone());
                let host = LocalHost::new(&mode);
                let driver = FormDriver::new(
                    host.clone(),
                    Backend::Memory(service.clone()),
                    mode,
                    DEBOUNCE,
                );
                let (saved, on_saved) = recorder();

                assert_eq!(host.phase(), FormPhase::Loading);
                assert!(!driver.submit(|_| {}));

                driver.load().await;
                assert_eq!(host.phase(), FormPhase::Idle);
                assert_eq!(host.form.borrow().value(Field::Username), "grace");

                driver.input(Field::Name, "Grace Hopper");
                assert!(driver.submit(on_saved));
                wait(1).await;

                let expected = UserRecord::new("Grace Hopper", "grace", "grace@yahoo.com");
                assert_eq!(service.get(&id), Some(expected.clone()));
                assert_eq!(
                    service.calls(),
                    vec![Call::Fetch(id.clone()), Call::Update(id.clone(), expected)]
                );
                assert_eq!(saved.borrow()[0].id, Some(id));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_load_failure_is_surfaced_without_retry() {
        LocalSet::new()
            .run_until(async {
                let (driver, host, service) = driver(FormMode::Edit(UserId::new("404")));

                driver.load().await;
                wait(1_000).await;

                assert_eq!(
                    host.phase(),
                    FormPhase::LoadFailed("user 404 was not found".to_string())
                );
                assert_eq!(host.form.borrow().record(), &UserRecord::default());
                assert_eq!(service.calls(), vec![Call::Fetch(UserId::new("404"))]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_submission_in_flight() {
        LocalSet::new()
            .run_until(async {
                let (driver, host, service) = driver(FormMode::Create);
                let (saved, on_saved) = recorder();

                driver.input(Field::Name, "Ada");
                driver.input(Field::Username, "ada");
                assert!(driver.submit(on_saved));
                driver.input(Field::Name, "A");
                assert!(host.tasks.borrow().is_scheduled(Field::Name));

                driver.reset();
                wait(1_000).await;

                assert!(saved.borrow().is_empty());
                assert!(service.calls().is_empty());
                assert!(!host.tasks.borrow().is_submitting());
                assert!(!host.tasks.borrow().is_scheduled(Field::Name));
                assert_eq!(host.error(Field::Name), "");
                assert_eq!(host.phase(), FormPhase::Idle);
                assert_eq!(host.form.borrow().record(), &UserRecord::default());
            })
            .await;
    }
}
