/// Which side of the platform a node belongs to; drives its highlight colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	Candidate,
	Recruiter,
	Process,
	Result,
}

impl Category {
	pub const ALL: [Category; 4] = [
		Category::Candidate,
		Category::Recruiter,
		Category::Process,
		Category::Result,
	];

	pub fn name(self) -> &'static str {
		match self {
			Category::Candidate => "Candidate",
			Category::Recruiter => "Recruiter",
			Category::Process => "Process",
			Category::Result => "Result",
		}
	}

	/// Start and end stops of the category gradient.
	pub fn gradient(self) -> (&'static str, &'static str) {
		match self {
			Category::Candidate => ("#9333ea", "#db2777"),
			Category::Recruiter => ("#2563eb", "#06b6d4"),
			Category::Process => ("#16a34a", "#10b981"),
			Category::Result => ("#ea580c", "#dc2626"),
		}
	}

	pub fn css_gradient(self) -> String {
		let (from, to) = self.gradient();
		format!("linear-gradient(90deg, {from}, {to})")
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
	User,
	Users,
	Chart,
	Upload,
	Clock,
	Brain,
	Message,
	Files,
	UserCheck,
}

impl Icon {
	pub fn glyph(self) -> &'static str {
		match self {
			Icon::User => "\u{1F464}",
			Icon::Users => "\u{1F465}",
			Icon::Chart => "\u{1F4CA}",
			Icon::Upload => "\u{2B06}",
			Icon::Clock => "\u{1F552}",
			Icon::Brain => "\u{1F9E0}",
			Icon::Message => "\u{1F4AC}",
			Icon::Files => "\u{1F5C2}",
			Icon::UserCheck => "\u{2714}",
		}
	}
}

#[derive(Clone, Copy, Debug)]
pub struct NodeSpec {
	pub id: &'static str,
	pub title: &'static str,
	pub icon: Icon,
	pub x: f64,
	pub y: f64,
	/// Seconds before the entrance transition starts.
	pub delay: f64,
	pub category: Category,
}

#[derive(Clone, Copy, Debug)]
pub struct ArrowSpec {
	pub from: &'static str,
	pub to: &'static str,
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub delay: f64,
}

impl ArrowSpec {
	pub fn length(&self) -> f64 {
		((self.x2 - self.x1).powi(2) + (self.y2 - self.y1).powi(2)).sqrt()
	}

	/// Direction angle in radians.
	pub fn angle(&self) -> f64 {
		(self.y2 - self.y1).atan2(self.x2 - self.x1)
	}
}

#[derive(Clone, Copy, Debug)]
pub struct Step {
	pub title: &'static str,
	pub nodes: &'static [&'static str],
	pub description: &'static str,
}
