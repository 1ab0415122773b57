use gloo_storage::{LocalStorage, Storage};
use log::debug;
use shared::EmployeeSummaryDto;
use std::rc::Rc;
use yew::prelude::*;

const EMPLOYEE_STORAGE_KEY: &str = "employee";

/// Tri-state session status gating access to protected UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Unauthenticated,
    Authenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub status: AuthStatus,
    pub employee: Option<EmployeeSummaryDto>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: AuthStatus::Loading,
            employee: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Restored(EmployeeSummaryDto),
    RestoreFailed,
    SignedOut,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Restored(employee) => Rc::new(Self {
                status: AuthStatus::Authenticated,
                employee: Some(employee),
            }),
            SessionAction::RestoreFailed => Rc::new(Self {
                status: AuthStatus::Unauthenticated,
                employee: None,
            }),
            SessionAction::SignedOut => Rc::new(Self {
                status: AuthStatus::Unauthenticated,
                employee: None,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub sign_out: Callback<()>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the session status for the whole app and exposes it through
/// `SessionContext`. Starts in `Loading` and resolves once from local
/// storage on mount.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer_eq(SessionState::default);

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            match LocalStorage::get::<EmployeeSummaryDto>(EMPLOYEE_STORAGE_KEY) {
                Ok(employee) => {
                    debug!("Restored session for employee {}", employee.id);
                    session.dispatch(SessionAction::Restored(employee));
                }
                Err(_) => {
                    debug!("No stored session found");
                    session.dispatch(SessionAction::RestoreFailed);
                }
            }
            || ()
        });
    }

    let sign_out = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            LocalStorage::delete(EMPLOYEE_STORAGE_KEY);
            session.dispatch(SessionAction::SignedOut);
        })
    };

    let context = SessionContext {
        state: (*session).clone(),
        sign_out,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
