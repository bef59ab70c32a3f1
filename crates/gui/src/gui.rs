//! The windowed front-end for the replay, built with Iced.
//!
//! This file follows the Elm architecture, a Model-View-Update pattern:
//! - `ReplayApp` is the Model: the replay session plus the view toggles.
//! - `Message` is the Update trigger: keys, buttons, clicks and animation frames.
//! - `update` is the Update logic: it forwards each message to the session.
//! - `view` is the View: it draws the scene the session drives.

use iced::{
    executor, keyboard, mouse, time,
    widget::{canvas::{self, event, Frame, Geometry, Path, Program, Stroke}, text, Button, Column, Container, Row},
    Application, Color, Command, Element, Font, Length, Pixels, Point, Rectangle, Renderer, Settings, Size, Subscription, Theme,
};
use replay::scene::{Body, Highlight, SceneGraph, Shade};
use replay::view::ViewOptions;
use replay::{Config, MoveList, MoveOutcome, PieceId, Session, Side, Square, Step, Vec3};
use std::time::{Duration, Instant};

const BOARD_SIZE: f32 = 560.0;
const SQUARE_SIZE: f32 = BOARD_SIZE / 8.0;

/// Runs the GUI application.
pub fn run(config: Config, moves: MoveList) -> iced::Result {
    ReplayApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(700.0, 760.0),
            ..iced::window::Settings::default()
        },
        ..Settings::with_flags((config, moves))
    })
}

/// Defines the messages that can be sent to the `update` function.
#[derive(Debug, Clone)]
enum Message {
    Frame(Instant),
    NextMove,
    PreviousMove,
    Restart,
    FlipView,
    ToggleLights,
    SquareClicked(Square),
}

/// The main application state (the "Model").
struct ReplayApp {
    session: Session<SceneGraph>,
    view: ViewOptions,
    frame_interval: Duration,
    last_frame: Instant,

    // --- UI-specific state ---
    selected_piece: Option<PieceId>,
    status: String,
}

// --- Application Logic ---

impl Application for ReplayApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = (Config, MoveList);

    fn new((config, moves): (Config, MoveList)) -> (Self, Command<Message>) {
        let app = ReplayApp {
            frame_interval: config.frame_interval,
            session: Session::standard(config, moves),
            view: ViewOptions::default(),
            last_frame: Instant::now(),
            selected_piece: None,
            status: String::from("Press → for the next move"),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Chess Replay")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Frame(now) => {
                let dt = now.saturating_duration_since(self.last_frame);
                self.last_frame = now;
                if let Some(landed) = self.session.on_frame(dt) {
                    self.status = landed.to_string();
                }
            }
            Message::NextMove => {
                let step = self.session.on_advance_key();
                self.report_step(step);
            }
            Message::PreviousMove => {
                let step = self.session.on_retreat_key();
                self.report_step(step);
            }
            Message::Restart => {
                self.session.restart();
                self.selected_piece = None;
                self.status = String::from("Restarted");
            }
            Message::FlipView => self.view.toggle_flip(),
            Message::ToggleLights => self.view.toggle_lights(),
            Message::SquareClicked(square) => self.handle_square_clicked(square),
        }
        Command::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(key_to_message);
        if self.session.state().is_animating() {
            Subscription::batch(vec![keys, time::every(self.frame_interval).map(Message::Frame)])
        } else {
            keys
        }
    }

    fn view(&'_ self) -> Element<'_, Message> {
        let state = self.session.state();
        let status_text = format!("Move {}/{}  {}", state.cursor(), state.moves().len(), self.status);

        let canvas = canvas::Canvas::new(BoardCanvas {
            scene: self.session.scene(),
            view: self.view,
            selected_piece: self.selected_piece.as_ref(),
        })
        .width(Length::Fixed(BOARD_SIZE))
        .height(Length::Fixed(BOARD_SIZE));

        let controls = Row::new()
            .spacing(10)
            .push(Button::new(text("Previous")).on_press(Message::PreviousMove))
            .push(Button::new(text("Next")).on_press(Message::NextMove))
            .push(Button::new(text("Restart")).on_press(Message::Restart))
            .push(Button::new(text("Flip")).on_press(Message::FlipView))
            .push(Button::new(text("Lights")).on_press(Message::ToggleLights));

        let content = Column::new()
            .spacing(20)
            .align_items(iced::Alignment::Center)
            .push(text(status_text).size(Pixels(20.0)))
            .push(canvas)
            .push(controls);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}

fn key_to_message(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::NextMove),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::PreviousMove),
        keyboard::Key::Character("c") => Some(Message::FlipView),
        keyboard::Key::Character("l") => Some(Message::ToggleLights),
        _ => None,
    }
}

// --- Update Helper Functions ---

impl ReplayApp {
    fn report_step(&mut self, step: Step) {
        self.last_frame = Instant::now();
        self.status = match step {
            Step::Applied(outcome) => self.describe_outcome(outcome),
            Step::CursorOnly => String::from("Stepped back over a skipped move"),
            Step::Dropped => String::from("Still moving..."),
            Step::AtBoundary => String::from("No more moves that way"),
            Step::Disabled => String::from("Undo is turned off"),
        };
    }

    fn describe_outcome(&self, outcome: MoveOutcome) -> String {
        match outcome {
            MoveOutcome::Started { captured: Some(captured), .. } => format!("{captured} captured"),
            MoveOutcome::Started { .. } => match self.session.state().animating() {
                Some((piece, square)) => format!("{piece} -> {square}"),
                None => String::new(),
            },
            MoveOutcome::Dropped => String::from("Still moving..."),
            MoveOutcome::Unresolved(err) => format!("Skipped: {err}"),
        }
    }

    /// First click picks up the piece on a square, the second sends it to another square.
    fn handle_square_clicked(&mut self, square: Square) {
        let occupant = self.session.state().occupancy().get(square).cloned();
        match self.selected_piece.take() {
            Some(piece) if occupant.as_ref() != Some(&piece) => {
                let outcome = self.session.apply_manual(&piece, square);
                self.last_frame = Instant::now();
                self.status = self.describe_outcome(outcome);
            }
            Some(_) => {}
            None => self.selected_piece = occupant,
        }
    }
}

// --- Canvas Drawing Logic ---

struct BoardCanvas<'a> {
    scene: &'a SceneGraph,
    view: ViewOptions,
    selected_piece: Option<&'a PieceId>,
}

impl Program<Message> for BoardCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        self.draw_tiles(&mut frame);
        self.draw_pieces(&mut frame);

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: event::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(pos) = cursor.position_in(bounds) {
                let column = (pos.x / SQUARE_SIZE).floor() as u8;
                let row = (pos.y / SQUARE_SIZE).floor() as u8;
                if column < 8 && row < 8 {
                    let (x, y) = self.view.from_screen(column, row);
                    if let Some(square) = Square::from_coord(x, y) {
                        return (event::Status::Captured, Some(Message::SquareClicked(square)));
                    }
                }
            }
        }
        (event::Status::Ignored, None)
    }
}

// --- Canvas Drawing Helper Functions ---

impl BoardCanvas<'_> {
    fn draw_tiles(&self, frame: &mut Frame) {
        for tile in self.scene.tiles() {
            let Body::Tile { square, shade, highlight } = tile.body else {
                continue;
            };
            let (x, y) = square.coord();
            let (column, row) = self.view.to_screen(x, y);
            let top_left = Point::new(column as f32 * SQUARE_SIZE, row as f32 * SQUARE_SIZE);
            let path = Path::rectangle(top_left, Size::new(SQUARE_SIZE, SQUARE_SIZE));

            let base = match shade {
                Shade::Light => Color::from_rgb8(240, 217, 181),
                Shade::Dark => Color::from_rgb8(181, 136, 99),
            };
            let color = match highlight {
                Some(Highlight::Destination) => Color::from_rgb8(0, 255, 0),
                None => base,
            };
            frame.fill(&path, self.lit(color));
        }
    }

    fn draw_pieces(&self, frame: &mut Frame) {
        for piece in self.scene.pieces() {
            let Body::Piece { kind, side } = piece.body else {
                continue;
            };
            let center = self.screen_point(piece.position);
            let fill = match side {
                Side::Red => Color::from_rgb8(255, 0, 0),
                Side::Blue => Color::from_rgb8(0, 0, 255),
            };

            let shadow_offset = 3.0;
            let shadow = Path::circle(Point::new(center.x + shadow_offset, center.y + shadow_offset), SQUARE_SIZE * 0.35);
            frame.fill(&shadow, Color::from_rgba8(0, 0, 0, 0.4));

            let circle = Path::circle(center, SQUARE_SIZE * 0.35);
            frame.fill(&circle, self.lit(fill));
            let outline = if self.selected_piece.map(PieceId::as_str) == Some(piece.name.as_str()) {
                Stroke::default().with_width(4.0).with_color(Color::from_rgb8(0, 255, 0))
            } else {
                Stroke::default().with_width(2.0).with_color(Color::BLACK)
            };
            frame.stroke(&circle, outline);

            frame.fill_text(canvas::Text {
                content: kind.symbol().to_string(),
                position: center,
                color: Color::WHITE,
                size: Pixels(SQUARE_SIZE * 0.4),
                font: Font::DEFAULT,
                horizontal_alignment: iced::alignment::Horizontal::Center,
                vertical_alignment: iced::alignment::Vertical::Center,
                line_height: iced::widget::text::LineHeight::default(),
                shaping: iced::widget::text::Shaping::Basic,
            });
        }
    }

    /// Canvas point of a world position. Pieces in flight land between cells.
    fn screen_point(&self, position: Vec3) -> Point {
        let board_x = position.x + replay::constants::BOARD_CENTER;
        let board_y = position.y + replay::constants::BOARD_CENTER;
        let (column, row) = if self.view.flipped {
            (7.0 - board_x, board_y)
        } else {
            (board_x, 7.0 - board_y)
        };
        Point::new((column + 0.5) * SQUARE_SIZE, (row + 0.5) * SQUARE_SIZE)
    }

    /// Dims a colour while the lights are off.
    fn lit(&self, color: Color) -> Color {
        if self.view.lights_on {
            color
        } else {
            Color { r: color.r * 0.45, g: color.g * 0.45, b: color.b * 0.45, a: color.a }
        }
    }
}
