//! Plotting observer for visualizing trajectories.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use drift_core::{Observer, Phase};
use drift_solvers::transient;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Decay").axes("Time [s]", "N").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no labels, no
    /// legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x- and y-axis labels.
    #[must_use]
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are silently skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to pass [`PlotObserver`] directly as the
/// solver observer. Return `None` from [`x`][Plottable::x] to skip the event
/// entirely; return `None` in a trace slot to skip only that trace.
///
/// Transient events implement it out of the box: scalar runs plot the state,
/// and [`Phase`] runs plot position and velocity.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for transient::Event<f64> {
    fn x(&self) -> Option<f64> {
        Some(self.sample.time)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.sample.state)]
    }
}

impl Plottable<2> for transient::Event<Phase> {
    fn x(&self) -> Option<f64> {
        Some(self.sample.time)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.sample.state.position), Some(self.sample.state.velocity)]
    }
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by either:
///
/// - **Direct path**: pass `&mut PlotObserver` as the solver observer for
///   events that implement [`Plottable<N>`][Plottable].
/// - **Closure path**: wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record], for example to overlay the closed-form
///   solution next to the numerical one.
///
/// Finished trajectories can also be added whole with
/// [`record_points`][PlotObserver::record_points].
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example: closure path
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Euler", "Analytical"]);
///
/// euler::solve(&decay, 100.0, &span, |event: &transient::Event<f64>| {
///     let t = event.sample.time;
///     obs.record(t, [Some(event.sample.state), Some(decay.solution(&100.0, t))]);
///     None
/// });
///
/// obs.show(ShowConfig::new().title("Radioactive decay").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Appends `[x, y]` points to one trace.
    ///
    /// Pairs naturally with [`Trajectory::points`](drift_core::Trajectory::points).
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    pub fn record_points(&mut self, trace: usize, points: impl IntoIterator<Item = [f64; 2]>) {
        self.data[trace].extend(points);
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    x_label: config.x_label,
                    y_label: config.y_label,
                    legend: config.legend,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            match (&self.y_label, self.log_y) {
                (Some(label), true) => plot = plot.y_axis_label(format!("log₁₀ {label}")),
                (Some(label), false) => plot = plot.y_axis_label(label.clone()),
                (None, true) => plot = plot.y_axis_label("log₁₀"),
                (None, false) => {}
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
