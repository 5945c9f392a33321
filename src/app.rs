use std::{iter, sync::Arc};

use bytes::Bytes;
use iced::{
    event, executor, mouse,
    widget::{self, column, row},
    Application, Command, Event, Length, Point, Subscription, Theme,
};
use native_dialog::FileDialog;
use tracing::{debug, error};

use crate::{
    backend::{self, HttpBackend},
    card_list::{self, CardList, CardRow, DifferenceBlock, MulliganBlock},
    config::ViewerConfig,
    error::ViewerError,
    listing,
    models::{display_timestamp, Card, GameResult, MatchDetails, MatchSummary},
    overlay::OverlayLayer,
    preview::{PreviewController, Rect},
    view_model::{Activation, FetchRequest, MatchDetailView, MatchView, RequestToken},
};

const LISTING_LIMIT: usize = 200;

pub struct App {
    backend: Option<HttpBackend>,
    section: Section,
    matches: Vec<MatchSummary>,
    search_text: String,
    search_result: Vec<MatchSummary>,
    listing_status: String,
    detail: MatchDetailView,
    previews: PreviewController,
    overlay: OverlayLayer,
    cursor: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Matches,
    MatchDetails,
}

#[derive(Debug, Clone)]
pub enum AppMessage {
    ChangeSection(Section),
    RefreshMatches,
    MatchesLoaded(Result<Vec<MatchSummary>, Arc<ViewerError>>),
    Search(String),
    OpenMatch(Option<String>),
    OpenMatchFile,
    MatchLoaded(RequestToken, Result<MatchDetails, Arc<ViewerError>>),
    CursorMoved(Point),
    RowEntered(String, Card),
    RowLeft(String, Card),
    ImageLoaded(String, Option<Bytes>),
}

type AppElement<'a> = iced::Element<'a, AppMessage, Theme, iced::Renderer>;

impl Application for App {
    type Executor = executor::Default;
    type Message = AppMessage;
    type Theme = Theme;
    type Flags = ViewerConfig;

    fn new(flags: Self::Flags) -> (Self, Command<Self::Message>) {
        let backend = match HttpBackend::from_config(&flags) {
            Ok(backend) => Some(backend),
            Err(e) => {
                error!("backend unavailable, only match files can be opened: {}", e);
                None
            }
        };

        let mut app = Self {
            backend,
            section: Section::Matches,
            matches: Vec::new(),
            search_text: String::new(),
            search_result: Vec::new(),
            listing_status: String::new(),
            detail: MatchDetailView::new(),
            previews: PreviewController::new(),
            overlay: OverlayLayer::default(),
            cursor: Point::ORIGIN,
        };

        let mut commands = vec![app.load_matches()];
        if let Some(match_id) = flags.match_id.as_deref() {
            app.section = Section::MatchDetails;
            commands.push(app.activate(Some(match_id)));
        }

        (app, Command::batch(commands))
    }

    fn title(&self) -> String {
        "mtga match viewer".to_owned()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        event::listen_with(|event, _status| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(AppMessage::CursorMoved(position))
            }
            _ => None,
        })
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            AppMessage::ChangeSection(section) => {
                if self.section == Section::MatchDetails && section != Section::MatchDetails {
                    self.release_previews();
                    self.detail.deactivate();
                }
                self.section = section;
            }
            AppMessage::RefreshMatches => return self.load_matches(),
            AppMessage::MatchesLoaded(result) => match result {
                Ok(matches) => {
                    self.listing_status = format!("{} matches", matches.len());
                    self.matches = matches;
                    self.search_result =
                        listing::search_matches(&self.search_text, &self.matches, LISTING_LIMIT);
                }
                Err(e) => {
                    error!("error retrieving matches: {}", e);
                    self.listing_status = "Could not load matches".to_owned();
                }
            },
            AppMessage::Search(query) => {
                self.search_text = query;
                self.search_result =
                    listing::search_matches(&self.search_text, &self.matches, LISTING_LIMIT);
            }
            AppMessage::OpenMatch(match_id) => {
                self.release_previews();
                self.section = Section::MatchDetails;
                return self.activate(match_id.as_deref());
            }
            AppMessage::OpenMatchFile => {
                let path = match FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .show_open_single_file()
                {
                    Ok(Some(path)) => path,
                    Ok(None) => return Command::none(),
                    Err(e) => {
                        error!("could not open file dialog: {}", e);
                        return Command::none();
                    }
                };

                self.release_previews();
                self.section = Section::MatchDetails;
                let token = self.detail.begin_load(path.display().to_string()).token;
                return Command::perform(
                    async move { backend::load_match_file(&path).map_err(Arc::new) },
                    move |result| AppMessage::MatchLoaded(token, result),
                );
            }
            AppMessage::MatchLoaded(token, result) => {
                if self.detail.complete(token, result) {
                    self.release_previews();
                }
            }
            AppMessage::CursorMoved(position) => self.cursor = position,
            AppMessage::RowEntered(row_id, card) => {
                // iced does not report widget bounds, the cursor stands in for the row
                self.overlay
                    .track_row(&row_id, Rect::new(self.cursor.x, self.cursor.y, 0.0, 0.0));
                if !self.previews.on_enter(&mut self.overlay, &row_id, &card) {
                    return Command::none();
                }
                if let Some(request) = self.overlay.request_image(&card) {
                    return Command::perform(backend::download_image(request), |(name, bytes)| {
                        AppMessage::ImageLoaded(name, bytes)
                    });
                }
            }
            AppMessage::RowLeft(row_id, card) => {
                self.previews.on_leave(&mut self.overlay, &card);
                self.overlay.forget_row(&row_id);
            }
            AppMessage::ImageLoaded(card_name, bytes) => {
                self.overlay.store_image(&card_name, bytes);
            }
        };

        Command::none()
    }

    fn view(&self) -> iced::Element<'_, Self::Message, Self::Theme, iced::Renderer> {
        let btn_matches = widget::button("Matches")
            .width(Length::Fixed(100.))
            .on_press(AppMessage::ChangeSection(Section::Matches));
        let btn_details = widget::button("Details")
            .width(Length::Fixed(100.))
            .on_press(AppMessage::OpenMatch(None));
        let btn_open = widget::button("Open file")
            .width(Length::Fixed(100.))
            .on_press(AppMessage::OpenMatchFile);

        let list_btn = column!(btn_matches, btn_details, btn_open);

        let content = match self.section {
            Section::Matches => view_matches(self),
            Section::MatchDetails => view_match_details(self),
        };

        let previews: AppElement = self.overlay.view();

        row!(list_btn, content, previews).into()
    }
}

impl App {
    fn load_matches(&mut self) -> Command<AppMessage> {
        let Some(backend) = self.backend.clone() else {
            self.listing_status = "No backend configured".to_owned();
            return Command::none();
        };

        self.listing_status = "Loading matches...".to_owned();
        Command::perform(
            async move { backend.matches().await.map_err(Arc::new) },
            AppMessage::MatchesLoaded,
        )
    }

    fn activate(&mut self, match_id: Option<&str>) -> Command<AppMessage> {
        match self.detail.activate(match_id) {
            Activation::Placeholder => Command::none(),
            Activation::Fetch(request) => self.fetch_match(request),
        }
    }

    fn fetch_match(&mut self, request: FetchRequest) -> Command<AppMessage> {
        let FetchRequest { token, match_id } = request;
        match self.backend.clone() {
            Some(backend) => Command::perform(
                async move { backend.match_details(&match_id).await.map_err(Arc::new) },
                move |result| AppMessage::MatchLoaded(token, result),
            ),
            None => {
                self.detail
                    .complete(token, Err::<MatchDetails, _>("no backend configured"));
                Command::none()
            }
        }
    }

    fn release_previews(&mut self) {
        self.previews.teardown(&mut self.overlay);
        self.overlay.clear_rows();
        debug!("match detail previews released");
    }
}

fn view_matches(app: &App) -> AppElement {
    let search_box = widget::text_input("search player...", &app.search_text)
        .on_input(AppMessage::Search);
    let btn_refresh = widget::button("Refresh").on_press(AppMessage::RefreshMatches);

    let header = row!(
        widget::text("Controller").width(Length::Fill),
        widget::text("Opponent").width(Length::Fill),
        widget::text("Created At").width(Length::Fill)
    );

    let rows = widget::scrollable(widget::column(
        app.search_result.iter().map(view_match_row),
    ))
    .width(Length::Fill);

    column!(
        row!(search_box, btn_refresh),
        widget::text(&app.listing_status),
        header,
        rows
    )
    .spacing(8)
    .into()
}

fn view_match_row(summary: &MatchSummary) -> AppElement {
    let cells = row!(
        widget::text(&summary.controller_player_name).width(Length::Fill),
        widget::text(&summary.opponent_player_name).width(Length::Fill),
        widget::text(display_timestamp(&summary.created_at)).width(Length::Fill)
    );

    widget::button(cells)
        .width(Length::Fill)
        .style(iced::theme::Button::Text)
        .on_press(AppMessage::OpenMatch(Some(summary.id.to_string())))
        .into()
}

fn view_match_details(app: &App) -> AppElement {
    let match_view = match app.detail.current() {
        Some(v) => v,
        None if app.detail.is_loading() => return widget::text("Loading match...").into(),
        None => return widget::text("No match loaded").into(),
    };

    let decklist = row!(
        view_primary_decklist(match_view),
        view_differences(match_view)
    )
    .spacing(16);

    let content = column!(
        view_header(match_view),
        widget::text("Primary Decklist").size(20),
        decklist,
        widget::text("Mulligans").size(24),
        view_mulligans(match_view)
    )
    .spacing(12)
    .padding(16);

    widget::scrollable(content).width(Length::Fill).into()
}

fn view_header(match_view: &MatchView) -> AppElement {
    let title = row!(
        widget::text(format!("VS. {}", match_view.opponent_player_name))
            .size(28)
            .width(Length::Fill),
        widget::text(match_view.id.to_string())
    );

    let results = widget::column(match_view.game_results.iter().map(view_game_result));

    column!(
        title,
        widget::text(display_timestamp(&match_view.created_at)),
        widget::text(format!("Controller: {}", match_view.controller_player_name)),
        widget::text(format!("Opponent: {}", match_view.opponent_player_name)),
        widget::text(format!("Winner: {}", match_view.winner())),
        results
    )
    .into()
}

fn view_game_result(result: &GameResult) -> AppElement {
    widget::text(format!("Game {}: {}", result.game_number, result.winning_player)).into()
}

fn view_primary_decklist(match_view: &MatchView) -> AppElement {
    let Some(decklist) = &match_view.primary_decklist else {
        return widget::Column::new().into();
    };

    let sections = card_list::main_deck_sections(decklist)
        .into_iter()
        .map(view_card_list);

    let archetype: AppElement = widget::text(format!("Archetype: {}", decklist.archetype)).into();
    let main_deck: AppElement = widget::text("Main Deck").size(18).into();

    widget::column([archetype, main_deck].into_iter().chain(sections))
        .width(Length::FillPortion(2))
        .into()
}

fn view_card_list<'a>(list: CardList) -> AppElement<'a> {
    let header: AppElement = widget::text(list.header).size(16).into();
    widget::column(iter::once(header).chain(list.rows.into_iter().map(view_card_row)))
        .padding(8)
        .into()
}

fn view_card_row<'a>(row: CardRow) -> AppElement<'a> {
    widget::mouse_area(widget::text(row.label))
        .on_enter(AppMessage::RowEntered(row.identifier.clone(), row.card.clone()))
        .on_exit(AppMessage::RowLeft(row.identifier, row.card))
        .into()
}

fn view_differences(match_view: &MatchView) -> AppElement {
    let Some(differences) = &match_view.differences else {
        return widget::Column::new().into();
    };

    let blocks = card_list::difference_blocks(differences)
        .into_iter()
        .map(view_difference);

    let title: AppElement = widget::text("Sideboard Decisions").size(18).into();

    widget::column(iter::once(title).chain(blocks))
        .spacing(8)
        .width(Length::FillPortion(1))
        .into()
}

fn view_difference<'a>(block: DifferenceBlock) -> AppElement<'a> {
    let title: AppElement = widget::text(format!("Game {}", block.game_number)).size(16).into();
    let added: AppElement = widget::text("Added").into();
    let removed: AppElement = widget::text("Removed").into();

    widget::column(
        iter::once(title)
            .chain(iter::once(added))
            .chain(block.added.into_iter().map(view_card_row))
            .chain(iter::once(removed))
            .chain(block.removed.into_iter().map(view_card_row)),
    )
    .into()
}

fn view_mulligans(match_view: &MatchView) -> AppElement {
    let columns = card_list::mulligan_columns(&match_view.mulligan_groups)
        .into_iter()
        .map(view_mulligan_column);

    widget::row(columns).spacing(16).into()
}

fn view_mulligan_column<'a>(blocks: Vec<MulliganBlock>) -> AppElement<'a> {
    widget::column(blocks.into_iter().map(view_mulligan))
        .spacing(8)
        .width(Length::Fill)
        .into()
}

fn view_mulligan<'a>(block: MulliganBlock) -> AppElement<'a> {
    let title: AppElement = widget::text(format!("Game {}", block.game_number)).size(16).into();
    let hand: AppElement = widget::text("Hand").into();
    let details = column!(
        widget::text(format!("Opponent Identity: {}", block.opponent_identity)),
        widget::text(format!("Number to Keep: {}", block.number_to_keep)),
        widget::text(format!("Play/Draw: {}", block.play_draw)),
        widget::text(format!("Decision: {}", block.decision))
    );

    widget::column(
        iter::once(title)
            .chain(iter::once(hand))
            .chain(block.hand.into_iter().map(view_card_row))
            .chain(iter::once(details.into())),
    )
    .into()
}
