use leptos::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    content: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "John Smith",
        role: "Fish Farm Owner",
        image: "https://randomuser.me/api/portraits/men/1.jpg",
        content: "GrowFeed has transformed our operations. We've seen a 40% increase in efficiency and significant cost savings.",
    },
    Testimonial {
        name: "Maria Garcia",
        role: "Aquaculture Specialist",
        image: "https://randomuser.me/api/portraits/women/2.jpg",
        content: "The smart monitoring system is incredible. It's like having an expert watching over your fish 24/7.",
    },
    Testimonial {
        name: "David Chen",
        role: "Commercial Farm Manager",
        image: "https://randomuser.me/api/portraits/men/3.jpg",
        content: "Implementation was smooth and the results were immediate. Our fish health has never been better.",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What Our Clients Say"</h2>
                    <p class="section-description">"Success stories from fish farms worldwide"</p>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <article class="testimonial-card">
                                    <span class="testimonial-quote" aria-hidden="true">"❝"</span>
                                    <div class="testimonial-author">
                                        <img class="testimonial-avatar" src=t.image alt=t.name />
                                        <div>
                                            <h3 class="testimonial-name">{t.name}</h3>
                                            <p class="testimonial-role">{t.role}</p>
                                        </div>
                                    </div>
                                    <p class="testimonial-content">{t.content}</p>
                                    <div class="testimonial-stars" aria-label="5 out of 5 stars">
                                        "★★★★★"
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
