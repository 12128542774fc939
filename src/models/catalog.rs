// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in project table.

use super::project::{Inline, Portfolio, ProjectRecord};

/// Site name shown when neither the config nor an imported table sets one.
pub const DEFAULT_SITE_NAME: &str = "Neelemanet";

const FRAME_STYLE: &str = "border:1px solid #e0e0e0;border-radius:4px;";
const IMAGE_STYLE: &str = "width:100%; border:1px solid #e0e0e0; border-radius:4px;";

fn frame(src: &str, height: u32) -> String {
    format!(
        "<iframe src=\"{}\" width=\"100%\" height=\"{}\" frameborder=\"0\" style=\"{}\"></iframe>",
        src, height, FRAME_STYLE
    )
}

fn image(src: &str, alt: &str) -> String {
    format!("<img src=\"{}\" alt=\"{}\" style=\"{}\">", src, alt, IMAGE_STYLE)
}

/// The default portfolio.
pub fn builtin() -> Portfolio {
    let projects = vec![
        ProjectRecord::new("Alpha Solve")
            .with_link("https://github.com/icanthink42/alpha_solve")
            .with_description(vec![
                Inline::text(
                    "Inspired by my favorite calculator, Desmos, I wrote a plugin based calculator \
                     that allows the user to solve problems both symbolically and numerically. The \
                     calculator is split up into three main parts: the plugin manager, the python \
                     executor, and the project. Plugins are written in Python and executed with a \
                     WASM compiled cython interpreter so pythons powerful symbolic solving libraries \
                     can be utilized. I aim to make writing a plugin as simple as possible so people \
                     with expert math skills and minimal programming skills can contribute. ",
                ),
                Inline::link(
                    "Plugin creation docs",
                    "https://github.com/icanthink42/alpha_solve/blob/main/docs/plugin-development.md",
                ),
            ])
            .with_media([
                frame("https://alphasolve.neelema.net/", 1200),
                image("quadratic_alphasolve.png", "Alpha Solve Quadratic Example"),
                image("diffeq_alphasolve.png", "Alpha Solve Differential Equation Example"),
                image("idealgass_alphasolve.png", "Alpha Solve Ideal Gas Example"),
                image("integral_alphasolve.png", "Alpha Solve Integral Example"),
            ]),
        ProjectRecord::new("ICBM KKV Interceptor")
            .with_link("https://github.com/icanthink42/kkv_interceptor")
            .with_description(vec![Inline::text(
                "At the end of my spaceflight mechanics class, we were tasked with doing an \
                 open-ended project. I decided to write a program in Rust to perform a Monte Carlo \
                 simulation of KKV ICBM interception. The program finds a range of possible \
                 interceptions and then performs an orbital mechanics simulation with added \
                 uncertainty in the burn to determine what burn minimizes the possibility of \
                 missing the target.",
            )])
            .with_media([
                frame("https://icanthink42.github.io/spaceflight_mechanics_plots/plot1.html", 1200),
                frame("https://icanthink42.github.io/spaceflight_mechanics_plots/plot2.html", 1200),
                frame("https://icanthink42.github.io/spaceflight_mechanics_plots/plot3.html", 1200),
            ]),
        ProjectRecord::new("Rust Generalsio Rewrite")
            .with_link("https://github.com/icanthink42/generals")
            .with_description(vec![Inline::text(
                "At Breeze, we would play a game called Generals.io after work on Fridays. I \
                 decided to rewrite the game entirely in Rust. Both the front end and backend are \
                 written in Rust in the same codebase. The backend compiles to x86 while the \
                 frontend compiles to WASM. This was a difficult setup due to the fact that they \
                 have a shared library that must compile to both x86 and WASM. This is obviously \
                 overkill for a simple game, but it was fun. I am a strong believer in defining \
                 data structures in a way that does not allow for invalid state to exist. The \
                 powerful Rust typing system along with keeping the frontend and backend both in \
                 the same codebase allowed me to do exactly that.",
            )])
            .with_media([image("generals.png", "Rust Generals.io Screenshot")]),
        ProjectRecord::new("Rocket Engine")
            .with_link("https://rocketengine.neelema.net/")
            .with_description(vec![
                Inline::text(
                    "While taking a propulsion systems class and learning about the equation ",
                ),
                Inline::image("conv_div_eq.svg", "Converging-Diverging Equation"),
                Inline::text(
                    " which describes the reason for the diverging/converging nozzle of rocket \
                     engines, I decided to write a simple Quasi-1D numerical simulation of the \
                     equation. I've known about the conceptual side of why rocket engines work for \
                     a while, so learning the mathematical side really motivated me to write a \
                     simulation.",
                ),
            ])
            .with_media([frame("https://rocketengine.neelema.net/", 600)]),
        ProjectRecord::new("Spring Mass Damper Frequency Domain Modeler")
            .with_link("https://github.com/icanthink42/modcon_physics_solver")
            .with_description(vec![Inline::text(
                "While taking Modeling and Control of Dynamical Systems (MODCON), I got tired of \
                 manually solving spring-mass-damper systems by hand so I wrote a tool to \
                 automatically solve them for me. I added support for both linear and radial \
                 systems as well as combinations of the two. I also added gears and custom \
                 forcing functions because I had a lot of questions that involved them on my \
                 homework.",
            )])
            .with_media([
                image(
                    "spring_mass_damper.png",
                    "Spring Mass Damper Frequency Domain Modeler Screenshot",
                ),
                image("spring_mass_damper_eq.svg", "Spring Mass Damper Equations of Motion"),
                image(
                    "spring_mass_damper_laplace_eq.svg",
                    "Spring Mass Damper Laplace Transform",
                ),
            ]),
        ProjectRecord::new("Javascript Memory Visualizer")
            .with_link("https://memory.neelema.net/")
            .with_description(vec![Inline::text(
                "I talk with a lot of engineers who program often in Matlab and Python, but rarely \
                 venture into the land of languages like C or C++. To this crowd, pointers are a \
                 scary concept because they are seen as a low level concept that only exists on \
                 'real' programming languages. The reality of programming is that pointers always \
                 exist, and no matter how hard a language tries to hide them, you need to \
                 understand them to program. I wrote this program to attempt to demonstrate what a \
                 pointer is in a familiar context. I facetiously put 'Even Bad Languages Have \
                 Pointers' in the title.",
            )])
            .with_media([frame("https://memory.neelema.net/", 1600)]),
        ProjectRecord::new("SSL Proxy")
            .with_description(vec![Inline::text(
                "For years I have had trouble setting up SSL certificates on my small hobby \
                 projects. Each time I set up a new project I would have to set up a new SSL \
                 certificate and inevitably debug some aspect I forgot to setup. This proxy uses \
                 an ALB to encrypt and decrypt HTTPS traffic and send it to backend ec2 instances \
                 as HTTP traffic. The site you're on right now uses this proxy extensively. Simple \
                 static pages like this one do not route through the ALB and instead use the CERT \
                 of a hosting service like Vercel/GitHub Pages.",
            )])
            .with_media([image("load_balancer.png", "Load Balancer Architecture")]),
        ProjectRecord::new("A Flight Simulator Built in a Calculator")
            .with_link("https://www.desmos.com/calculator/ixfvv2bode")
            .with_description(vec![
                Inline::text(
                    "I have been a huge fan of the calculator Desmos for a long time. I orignally \
                     started using in high school for homework, but since then I've had a lot of \
                     fun playing around with all the quasi-programming features they've added over \
                     the years. Back when I had a lot more free time I wrote this flight simulator \
                     using those features. I also wrote an ",
                ),
                Inline::link(
                    "n-body simulator in Desmos",
                    "https://www.desmos.com/calculator/t5pj25dz7g",
                ),
                Inline::text("."),
            ])
            .with_media([frame("https://www.desmos.com/calculator/ixfvv2bode", 1200)]),
        ProjectRecord::new("Entropy Simulation")
            .with_link("https://entropy.neelema.net")
            .with_description(vec![Inline::text(
                "I came up with the idea for this small simulation when talking with my Dad about \
                 the nature of entropy. I was arguing that entropy is not a physical law but \
                 rather a statistical law. I wrote this simulation to demonstrate this idea. The \
                 simulation I wrote has very simple laws, praticles bounce off walls and each \
                 other, and particles move at constant velocity. When you click inside the \
                 simulation, you can add particles to the system. This decrases the specific \
                 entropy as the new particles have fewer degrees of freedom. Overtime the system \
                 naturally moves to a state of maximum entropy. The point I was trying to make \
                 about entropy is that is is a result of simple natrual laws that maximize the \
                 number of possible configurations of a system. Entropy is not a physical law, it \
                 is a statistical law.",
            )])
            .with_media([frame("https://entropy.neelema.net", 1200)]),
    ];

    Portfolio::new(DEFAULT_SITE_NAME, projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::classifier::{extract_source, frame_height, is_embedded_frame};

    #[test]
    fn test_builtin_table_shape() {
        let portfolio = builtin();
        assert_eq!(portfolio.site_name, DEFAULT_SITE_NAME);
        assert_eq!(portfolio.projects.len(), 9);
        assert!(portfolio.projects.iter().all(|p| p.has_media()));
        assert!(portfolio.projects[6].link.is_none());
    }

    #[test]
    fn test_builtin_fragments_classify() {
        let portfolio = builtin();
        let alpha = &portfolio.projects[0].media;

        assert!(is_embedded_frame(&alpha[0]));
        assert_eq!(extract_source(&alpha[0]), "https://alphasolve.neelema.net/");
        assert_eq!(frame_height(&alpha[0]), Some(1200.0));

        assert!(!is_embedded_frame(&alpha[1]));
        assert_eq!(extract_source(&alpha[1]), "quadratic_alphasolve.png");

        assert_eq!(portfolio.frame_count(), 8);
    }

    #[test]
    fn test_every_fragment_has_a_source() {
        for project in &builtin().projects {
            for fragment in &project.media {
                assert!(!extract_source(fragment).is_empty(), "{}", fragment);
            }
        }
    }
}
