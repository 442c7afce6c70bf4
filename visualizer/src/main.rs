use iced::{
    mouse,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, slider, text, text_input, Column, Container,
    },
    Alignment, Color, Element, Length, Pixels, Point, Rectangle, Renderer, Task, Theme,
};
use speedcore::chat::{Role, Session};
use speedcore::interface::text::{
    APP_INTRO, APP_SUBTITLE, APP_TITLE, CHAT_HEADER, CHAT_PLACEHOLDER, LIMITATIONS,
    PARAMETERS_HEADER, PLOT_TITLE, PLOT_X_LABEL, PLOT_Y_LABEL,
};
use speedcore::interface::{HOURS, INITIAL_SPEED, RATE_PERCENT};
use speedcore::processing::{Curve, ModelReport, PlotBounds, ReportBuilder};
use speedcore::ModelParameters;

fn main() -> iced::Result {
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    APP_TITLE.into()
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Light
}

#[derive(Debug)]
struct Visualizer {
    initial_speed: i32,
    rate_percent: i32,
    hours: i32,
    question: String,
    report: ModelReport,
    builder: ReportBuilder,
    session: Session,
    error: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    InitialSpeedChanged(i32),
    RatePercentChanged(i32),
    HoursChanged(i32),
    QuestionChanged(String),
    AskSubmitted,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let builder = ReportBuilder::new();
        let session = Session::new();
        let report = session.render(&builder);
        (
            Visualizer {
                initial_speed: INITIAL_SPEED.default,
                rate_percent: RATE_PERCENT.default,
                hours: HOURS.default,
                question: String::new(),
                report,
                builder,
                session,
                error: None,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::InitialSpeedChanged(value) => {
                state.initial_speed = INITIAL_SPEED.snap(value as f64);
            }
            Message::RatePercentChanged(value) => {
                state.rate_percent = RATE_PERCENT.snap(value as f64);
            }
            Message::HoursChanged(value) => {
                state.hours = HOURS.snap(value as f64);
            }
            Message::QuestionChanged(value) => {
                state.question = value;
                return Task::none();
            }
            Message::AskSubmitted => {
                if state.session.ask(&state.question).is_some() {
                    state.question.clear();
                }
            }
        }
        state.rerender();
        Task::none()
    }

    /// Rebuilds parameters from the sliders and re-runs the model.
    fn rerender(&mut self) {
        match ModelParameters::new(
            self.initial_speed as f64,
            self.rate_percent,
            self.hours.max(0) as u32,
        ) {
            Ok(params) => {
                self.session.set_parameters(params);
                self.report = self.session.render(&self.builder);
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let controls = column![
            text(PARAMETERS_HEADER).size(24),
            text(format!("{}: {}", INITIAL_SPEED.label, state.initial_speed)).size(14),
            slider(
                INITIAL_SPEED.min..=INITIAL_SPEED.max,
                state.initial_speed,
                Message::InitialSpeedChanged
            )
            .step(INITIAL_SPEED.step),
            text(format!("{}: {}", RATE_PERCENT.label, state.rate_percent)).size(14),
            slider(
                RATE_PERCENT.min..=RATE_PERCENT.max,
                state.rate_percent,
                Message::RatePercentChanged
            )
            .step(RATE_PERCENT.step),
            text(format!("{}: {}", HOURS.label, state.hours)).size(14),
            slider(HOURS.min..=HOURS.max, state.hours, Message::HoursChanged).step(HOURS.step),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(300.0));

        let controls = match &state.error {
            Some(err) => controls.push(text(err).size(12).color(Color::from_rgb(0.8, 0.1, 0.1))),
            None => controls,
        };

        let plot = Canvas::new(SpeedPlot::new(&state.report.curve))
            .width(Length::Fill)
            .height(Length::Fixed(320.0));

        let transcript = state.session.transcript().messages().iter().fold(
            Column::new().spacing(6),
            |col, message| {
                let (speaker, color) = match message.role {
                    Role::Assistant => ("assistant", Color::from_rgb(0.12, 0.35, 0.6)),
                    Role::User => ("you", Color::from_rgb(0.2, 0.2, 0.2)),
                };
                col.push(
                    column![
                        text(speaker).size(12).color(color),
                        text(message.content.clone()).size(14),
                    ]
                    .spacing(2),
                )
            },
        );

        let chat_input = row![
            text_input(CHAT_PLACEHOLDER, &state.question)
                .on_input(Message::QuestionChanged)
                .on_submit(Message::AskSubmitted)
                .padding(6),
            button("Ask").on_press(Message::AskSubmitted).padding(8),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let content = column![
            text(APP_TITLE).size(30),
            text(APP_SUBTITLE).size(18),
            text(APP_INTRO).size(14),
            text("Result").size(22),
            text(&state.report.summary).size(16),
            plot,
            text("Interpretation").size(22),
            text(format!("- {}", state.report.interpretation.sentence())).size(14),
            text("Model Limitations").size(22),
            Container::new(text(LIMITATIONS).size(14).color(Color::from_rgb(0.55, 0.4, 0.0)))
                .padding(10),
            text(CHAT_HEADER).size(22),
            Container::new(scrollable(transcript).height(Length::Fixed(220.0))).padding(6),
            chat_input,
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![controls, scrollable(content)]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Pixel margins around the plotted region.
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 32.0;
const MARGIN_BOTTOM: f32 = 44.0;
const GRID_DIVISIONS: usize = 5;

/// Maps model coordinates into the canvas.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    bounds: PlotBounds,
    width: f32,
    height: f32,
}

impl PlotArea {
    fn new(bounds: PlotBounds, size: iced::Size) -> Self {
        Self {
            bounds,
            width: (size.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (size.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    fn to_screen(&self, time: f64, speed: f64) -> Point {
        let x_frac = (time / self.bounds.x_max) as f32;
        let y_span = (self.bounds.y_max - self.bounds.y_min).max(f64::EPSILON);
        let y_frac = ((speed - self.bounds.y_min) / y_span) as f32;
        Point::new(
            MARGIN_LEFT + x_frac * self.width,
            MARGIN_TOP + (1.0 - y_frac) * self.height,
        )
    }
}

#[derive(Clone)]
struct SpeedPlot {
    points: Vec<(f64, f64)>,
    bounds: PlotBounds,
}

impl SpeedPlot {
    fn new(curve: &Curve) -> Self {
        Self {
            points: curve.points.iter().map(|p| (p.time, p.speed)).collect(),
            bounds: curve.plot_bounds(),
        }
    }
}

impl canvas::Program<Message> for SpeedPlot {
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
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);

        let area = PlotArea::new(self.bounds, bounds.size());
        let grid_color = Color::from_rgb(0.88, 0.88, 0.9);
        let label_color = Color::from_rgb(0.25, 0.25, 0.3);

        for i in 0..=GRID_DIVISIONS {
            let frac = i as f64 / GRID_DIVISIONS as f64;
            let time = frac * self.bounds.x_max;
            let speed = self.bounds.y_min + frac * (self.bounds.y_max - self.bounds.y_min);

            let top = area.to_screen(time, self.bounds.y_max);
            let bottom = area.to_screen(time, self.bounds.y_min);
            let left = area.to_screen(0.0, speed);
            let right = area.to_screen(self.bounds.x_max, speed);

            let grid = Path::new(|builder| {
                builder.move_to(top);
                builder.line_to(bottom);
                builder.move_to(left);
                builder.line_to(right);
            });
            frame.stroke(&grid, Stroke::default().with_color(grid_color).with_width(1.0));

            frame.fill_text(canvas::Text {
                content: format!("{:.1}", time),
                position: Point::new(bottom.x - 8.0, bottom.y + 6.0),
                color: label_color,
                size: Pixels(11.0),
                ..canvas::Text::default()
            });
            frame.fill_text(canvas::Text {
                content: format!("{:.0}", speed),
                position: Point::new(6.0, left.y - 6.0),
                color: label_color,
                size: Pixels(11.0),
                ..canvas::Text::default()
            });
        }

        let origin = area.to_screen(0.0, self.bounds.y_min);
        let axes = Path::new(|builder| {
            builder.move_to(area.to_screen(0.0, self.bounds.y_max));
            builder.line_to(origin);
            builder.line_to(area.to_screen(self.bounds.x_max, self.bounds.y_min));
        });
        frame.stroke(&axes, Stroke::default().with_color(label_color).with_width(1.5));

        frame.fill_text(canvas::Text {
            content: PLOT_TITLE.into(),
            position: Point::new(bounds.width / 2.0 - 48.0, 6.0),
            color: label_color,
            size: Pixels(16.0),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: PLOT_X_LABEL.into(),
            position: Point::new(bounds.width / 2.0 - 36.0, bounds.height - 18.0),
            color: label_color,
            size: Pixels(12.0),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: PLOT_Y_LABEL.into(),
            position: Point::new(MARGIN_LEFT + 6.0, MARGIN_TOP - 14.0),
            color: label_color,
            size: Pixels(12.0),
            ..canvas::Text::default()
        });

        let curve_color = Color::from_rgb(0.12, 0.47, 0.71);
        match self.points.as_slice() {
            [] => {}
            [(time, speed)] => {
                let marker = Path::new(|builder| builder.circle(area.to_screen(*time, *speed), 4.0));
                frame.fill(&marker, curve_color);
            }
            points => {
                let path = Path::new(|builder| {
                    for (i, (time, speed)) in points.iter().enumerate() {
                        let point = area.to_screen(*time, *speed);
                        if i == 0 {
                            builder.move_to(point);
                        } else {
                            builder.line_to(point);
                        }
                    }
                });
                frame.stroke(&path, Stroke::default().with_width(2.5).with_color(curve_color));
            }
        }

        vec![frame.into_geometry()]
    }
}
