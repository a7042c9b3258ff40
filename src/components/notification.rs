use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::error::AppError;
use crate::utils::NOTICE_TIMEOUT_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Mensaje del banner de la pantalla
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn from_error(err: &AppError) -> Self {
        Self::error(err.user_message())
    }

    fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

/// Banner descartable; se oculta solo pasados unos segundos
#[function_component]
pub fn Notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.notice.clone(), move |notice| {
            let timeout = notice
                .as_ref()
                .map(|_| Timeout::new(NOTICE_TIMEOUT_MS, move || on_close.emit(())));
            move || drop(timeout)
        });
    }

    let Some(notice) = &props.notice else {
        return html! {};
    };

    html! {
        <div class={notice.css_class()} role="alert">
            <span class="notice-text">{ &notice.text }</span>
            <button type="button" class="notice-close" onclick={props.on_close.reform(|_| ())}>
                {"✕"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notice_uses_user_message() {
        let err = AppError::from_response(404, r#"{"msg":"Cliente no encontrado"}"#);
        let notice = Notice::from_error(&err);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Cliente no encontrado");
    }
}
