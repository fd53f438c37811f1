/*
[INPUT]:  AppConfig and user input via CLI prompts
[OUTPUT]: Work update submitted and follow-up answered against the backend
[POS]:    CLI interactive flow
[UPDATE]: When workflow stages or screen actions change
*/

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use intern_tracker_adapter::{InternTrackerClient, WorkStatus};
use tracing::{debug, warn};

use intern_tracker_client::workflow::{
    Effect, Notice, TempWorkUpdateRef, WorkflowController, WorkflowError,
};
use intern_tracker_client::{
    AppConfig, QuestionWizard, RequestFailure, WorkUpdateForm, WorkflowEvent, WorkflowStage,
};

/// What the current screen asks the loop to do next
enum Action {
    SubmitForm,
    Dispatch(WorkflowEvent),
    Stay,
    Quit,
}

pub async fn run_interactive(config: &AppConfig) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Intern Work Update Tracker").bold().cyan());
    println!("{}", style(format!("Backend: {}", config.api.base_url)).dim());

    let mut controller = WorkflowController::new(config.build_client()?);
    let mut form = WorkUpdateForm::for_user(config.default_user_id());

    loop {
        let action = match controller.stage() {
            WorkflowStage::Idle => form_screen(&mut form, &theme)?,
            WorkflowStage::Done => {
                let again = Confirm::with_theme(&theme)
                    .with_prompt("Submit another update?")
                    .default(false)
                    .interact()?;
                if !again {
                    return Ok(());
                }
                Action::Dispatch(WorkflowEvent::Close)
            }
            WorkflowStage::AwaitingFollowupRedirect => {
                let temp_ref = controller
                    .state()
                    .temp_ref()
                    .cloned()
                    .context("redirect without a temporary work update")?;
                redirect_screen(&temp_ref, &theme)?
            }
            WorkflowStage::AwaitingAnswers => {
                let reminder = controller
                    .state()
                    .session()
                    .and_then(|session| session.reminder.clone());
                let wizard = controller
                    .wizard_mut()
                    .context("follow-up questions are not loaded")?;
                wizard_screen(wizard, reminder.as_deref(), &theme)?
            }
            WorkflowStage::Error => {
                let failure = controller
                    .state()
                    .failure()
                    .cloned()
                    .context("error state without a failure")?;
                error_screen(&failure, &theme)?
            }
            stage @ (WorkflowStage::AwaitingCreateResponse
            | WorkflowStage::AwaitingSessionStart
            | WorkflowStage::AwaitingCompleteResponse) => {
                bail!("workflow left waiting in stage '{stage}'")
            }
        };

        match action {
            Action::Quit => return Ok(()),
            Action::Stay => {}
            Action::SubmitForm => {
                println!("{}", style("Submitting work update...").dim());
                match controller.submit_form(&form).await {
                    Ok(effects) => apply_effects(effects, &mut form, config),
                    Err(err) => println!("{}", style(err).red()),
                }
            }
            Action::Dispatch(event) => {
                if let Some(progress) = progress_message(&event) {
                    println!("{}", style(progress).dim());
                }
                match controller.dispatch(event).await {
                    Ok(effects) => apply_effects(effects, &mut form, config),
                    Err(WorkflowError::IncompleteAnswers(err)) => {
                        println!("{}", style(err).yellow());
                        focus_first_unanswered(&mut controller);
                    }
                    Err(err) => println!("{}", style(err).red()),
                }
            }
        }
    }
}

fn progress_message(event: &WorkflowEvent) -> Option<&'static str> {
    match event {
        WorkflowEvent::ConfirmFollowup => Some("Starting follow-up session..."),
        WorkflowEvent::SubmitAnswers => Some("Submitting answers..."),
        WorkflowEvent::Retry => Some("Retrying..."),
        _ => None,
    }
}

fn focus_first_unanswered(controller: &mut WorkflowController<InternTrackerClient>) {
    if let Some(wizard) = controller.wizard_mut() {
        if let Some(index) = wizard.first_unanswered() {
            wizard.jump_to(index);
        }
    }
}

fn apply_effects(effects: Vec<Effect>, form: &mut WorkUpdateForm, config: &AppConfig) {
    for effect in effects {
        match effect {
            Effect::Notify(Notice::Completed(completion)) => {
                println!("\n{} {}", style("SUCCESS!").bold().green(), completion);
            }
            Effect::Notify(Notice::Failed(failure)) => {
                println!("\n{} {}", style("Request failed:").bold().red(), failure.message);
            }
            Effect::ResetForm => *form = WorkUpdateForm::for_user(config.default_user_id()),
            Effect::Show(screen) => debug!(?screen, "showing screen"),
            Effect::Issue(request) => {
                warn!(request = request.name(), "unexpected unexecuted request")
            }
        }
    }
}

fn form_screen(form: &mut WorkUpdateForm, theme: &ColorfulTheme) -> Result<Action> {
    println!("\n{}", style("--- Work Update ---").bold());

    form.user_id = Input::with_theme(theme)
        .with_prompt("User ID")
        .with_initial_text(form.user_id.clone())
        .allow_empty(true)
        .interact_text()?;

    let labels: Vec<&str> = WorkStatus::ALL.iter().map(WorkStatus::label).collect();
    let current = WorkStatus::ALL
        .iter()
        .position(|status| *status == form.work_status)
        .unwrap_or_default();
    let selection = Select::with_theme(theme)
        .with_prompt("Status")
        .items(&labels)
        .default(current)
        .interact()?;
    form.work_status = WorkStatus::ALL[selection];

    let description_prompt = if form.work_status.requires_followup() {
        "What did you work on today?"
    } else {
        "Note (optional)"
    };
    form.description = Input::with_theme(theme)
        .with_prompt(description_prompt)
        .with_initial_text(form.description.clone())
        .allow_empty(true)
        .interact_text()?;

    if form.work_status.requires_followup() {
        form.challenges = Input::with_theme(theme)
            .with_prompt("Challenges (optional)")
            .with_initial_text(form.challenges.clone())
            .allow_empty(true)
            .interact_text()?;
        form.plans = Input::with_theme(theme)
            .with_prompt("Plans for tomorrow (optional)")
            .with_initial_text(form.plans.clone())
            .allow_empty(true)
            .interact_text()?;
    }

    let actions = ["Submit", "Edit again", "Quit"];
    let selection = Select::with_theme(theme)
        .with_prompt("Ready?")
        .items(&actions)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Action::SubmitForm,
        1 => Action::Stay,
        _ => Action::Quit,
    })
}

fn redirect_screen(temp_ref: &TempWorkUpdateRef, theme: &ColorfulTheme) -> Result<Action> {
    println!("\n{}", style(temp_ref.notice()).cyan());

    let actions = ["Start follow-up questions", "Close"];
    let selection = Select::with_theme(theme)
        .with_prompt("Continue")
        .items(&actions)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Action::Dispatch(WorkflowEvent::ConfirmFollowup),
        _ => Action::Dispatch(WorkflowEvent::Close),
    })
}

fn wizard_screen(
    wizard: &mut QuestionWizard,
    reminder: Option<&str>,
    theme: &ColorfulTheme,
) -> Result<Action> {
    if let Some(reminder) = reminder {
        println!("\n{}", style(reminder).yellow());
    }
    println!(
        "\n{} {}",
        style(wizard.status_line()).bold(),
        style(format!("[{:.0}%]", wizard.progress() * 100.0)).dim()
    );
    println!("{}", style(wizard.current_question()).cyan());
    if !wizard.current_answer().is_empty() {
        println!("{} {}", style("Current answer:").dim(), wizard.current_answer());
    }

    let actions = [
        "Answer",
        "Next question",
        "Previous question",
        "Jump to question",
        "Submit answers",
        "Close",
    ];
    let selection = Select::with_theme(theme)
        .with_prompt("Action")
        .items(&actions)
        .default(0)
        .interact()?;

    match selection {
        0 => {
            let answer: String = Input::with_theme(theme)
                .with_prompt("Your answer")
                .with_initial_text(wizard.current_answer())
                .allow_empty(true)
                .interact_text()?;
            wizard.set_answer(answer);
            wizard.next();
        }
        1 => wizard.next(),
        2 => wizard.previous(),
        3 => {
            let items: Vec<String> = wizard
                .questions()
                .iter()
                .enumerate()
                .map(|(index, question)| {
                    let mark = if wizard.answers().is_answered(index) { "x" } else { " " };
                    format!("[{mark}] {}. {question}", index + 1)
                })
                .collect();
            let index = Select::with_theme(theme)
                .with_prompt("Go to")
                .items(&items)
                .default(wizard.cursor())
                .interact()?;
            wizard.jump_to(index);
        }
        4 => return Ok(Action::Dispatch(WorkflowEvent::SubmitAnswers)),
        _ => return Ok(Action::Dispatch(WorkflowEvent::Close)),
    }
    Ok(Action::Stay)
}

fn error_screen(failure: &RequestFailure, theme: &ColorfulTheme) -> Result<Action> {
    println!("\n{} {}", style("Error:").bold().red(), failure.message);
    if !failure.retryable {
        println!(
            "{}",
            style("The server rejected the request; retrying will likely fail again.").dim()
        );
    }

    let actions = ["Retry", "Back", "Close"];
    let selection = Select::with_theme(theme)
        .with_prompt("What now?")
        .items(&actions)
        .default(0)
        .interact()?;

    Ok(Action::Dispatch(match selection {
        0 => WorkflowEvent::Retry,
        1 => WorkflowEvent::Dismiss,
        _ => WorkflowEvent::Close,
    }))
}
