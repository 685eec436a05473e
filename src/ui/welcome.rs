// SPDX-License-Identifier: MPL-2.0
//! Welcome form: the user's name and the time of the session.
//!
//! Errors are only recomputed on submit. Editing a field leaves its error
//! message in place until the next attempt. A start-up notice (settings that
//! could not be read) is shown above the fields.

use crate::i18n::fluent::I18n;
use crate::session::{validate, Field, FormErrors, SessionDraft, SessionRequest};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    font::Weight,
    widget::{button, column, container, row, text, text_input, Column},
    Alignment, Element, Font, Length,
};

/// Form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    draft: SessionDraft,
    errors: FormErrors,
    /// i18n key of a start-up notice.
    notice: Option<String>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form that opens with the notice `key`, if any.
    #[must_use]
    pub fn with_notice(key: Option<String>) -> Self {
        Self {
            notice: key,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn draft(&self) -> &SessionDraft {
        &self.draft
    }

    /// Errors from the last submission attempt.
    #[must_use]
    pub fn errors(&self) -> FormErrors {
        self.errors
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub colors: &'a ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    TimeChanged(String),
    /// Fill the time field with the current local time.
    UseCurrentTime,
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submitted(SessionRequest),
}

/// Current local time as `HH:MM`.
#[must_use]
pub fn current_time_text() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(name) => {
            state.draft.name = name;
            Event::None
        }
        Message::TimeChanged(time) => {
            state.draft.time = time;
            Event::None
        }
        Message::UseCurrentTime => {
            state.draft.time = current_time_text();
            Event::None
        }
        Message::Submit => match validate(&state.draft) {
            Ok(request) => {
                state.errors = FormErrors::default();
                Event::Submitted(request)
            }
            Err(errors) => {
                state.errors = errors;
                Event::None
            }
        },
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    let title = row![
        text(ctx.i18n.tr("welcome-title-prefix")).size(typography::TITLE_LG),
        text(ctx.i18n.tr("welcome-title-brand"))
            .size(typography::TITLE_LG)
            .font(bold)
            .color(ctx.colors.brand_primary),
    ]
    .spacing(spacing::XS);

    let name_input = text_input(
        &ctx.i18n.tr("welcome-name-placeholder"),
        &ctx.state.draft.name,
    )
    .on_input(Message::NameChanged)
    .on_submit(Message::Submit)
    .padding(spacing::XS)
    .size(typography::BODY_LG);

    let time_input = text_input(
        &ctx.i18n.tr("welcome-time-placeholder"),
        &ctx.state.draft.time,
    )
    .on_input(Message::TimeChanged)
    .on_submit(Message::Submit)
    .padding(spacing::XS)
    .size(typography::BODY_LG)
    .width(Length::Fixed(sizing::TIME_INPUT_WIDTH));

    let now_button = button(text(ctx.i18n.tr("welcome-time-now")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press(Message::UseCurrentTime);

    let name_field = labelled_field(
        &ctx,
        Field::Name,
        ctx.i18n.tr("welcome-name-label"),
        name_input.into(),
    );
    let time_field = labelled_field(
        &ctx,
        Field::Time,
        ctx.i18n.tr("welcome-time-label"),
        row![time_input, now_button]
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .into(),
    );

    let start_button = button(
        container(text(ctx.i18n.tr("welcome-start-button")).size(typography::BODY_LG))
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT + spacing::XS))
    .padding(spacing::XS)
    .style(styles::button::primary)
    .on_press(Message::Submit);

    let mut content = column![title].spacing(spacing::LG).align_x(Alignment::Start);
    if let Some(key) = ctx.state.notice() {
        content = content.push(
            text(ctx.i18n.tr(key))
                .size(typography::CAPTION)
                .color(ctx.colors.warning),
        );
    }
    let content = content.push(name_field).push(time_field).push(start_button);

    let card = container(content)
        .padding(spacing::XL)
        .width(Length::Fixed(sizing::WELCOME_CARD_WIDTH))
        .style(styles::container::card);

    container(card)
        .center(Length::Fill)
        .style(styles::container::backdrop(ctx.colors.surface_secondary))
        .into()
}

/// Label, input and (if the last submit rejected it) the field's error.
fn labelled_field<'a>(
    ctx: &ViewContext<'a>,
    field: Field,
    label: String,
    input: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut field_column = Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY))
        .push(input);

    if let Some(error) = ctx.state.errors.get(field) {
        field_column = field_column.push(
            text(ctx.i18n.tr(error.i18n_key(field)))
                .size(typography::CAPTION)
                .color(ctx.colors.error),
        );
    }

    field_column.into()
}
