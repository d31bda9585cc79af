use rand::Rng;
use yew::prelude::*;

use crate::animation::loader::LoaderPhase;
use crate::config;

const BURST_COUNT: usize = 24;
const BURST_COLORS: [&str; 3] = ["#6c63ff", "#43e8d8", "#ff6584"];

#[derive(Clone, Debug, PartialEq)]
pub struct BurstParticle {
    pub dx: f64,
    pub dy: f64,
    pub size: f64,
    pub color: &'static str,
    pub delay_s: f64,
}

/// Evenly spaced spokes with a random reach, so the burst looks ragged.
pub fn burst_particles<R: Rng + ?Sized>(rng: &mut R) -> Vec<BurstParticle> {
    (0..BURST_COUNT)
        .map(|i| {
            let angle = (i as f64 / BURST_COUNT as f64) * std::f64::consts::TAU;
            let distance = 80.0 + rng.gen::<f64>() * 120.0;
            BurstParticle {
                dx: angle.cos() * distance,
                dy: angle.sin() * distance,
                size: 3.0 + rng.gen::<f64>() * 5.0,
                color: BURST_COLORS[i % BURST_COLORS.len()],
                delay_s: rng.gen::<f64>() * 0.1,
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PageLoaderProps {
    pub phase: LoaderPhase,
}

#[function_component(PageLoader)]
pub fn page_loader(props: &PageLoaderProps) -> Html {
    let particles = use_state(|| burst_particles(&mut rand::thread_rng()));
    let phase = props.phase;

    if phase.is_done() {
        return html! {};
    }

    let bursting = matches!(phase, LoaderPhase::Burst | LoaderPhase::Exit);
    let sparking = phase == LoaderPhase::Shake;

    html! {
        <div class={classes!("page-loader", format!("phase-{}", phase))}>
            { for (1..=3).map(|ring| html! {
                <div
                    class="loader-ring"
                    style={format!("width: {0}px; height: {0}px; animation-delay: {1:.2}s;", ring * 160, ring as f64 * 0.15)}
                />
            }) }

            if phase == LoaderPhase::Burst {
                <div class="loader-shockwave" />
            }

            if bursting {
                { for particles.iter().map(|p| html! {
                    <div
                        class="loader-burst"
                        style={format!(
                            "--tx: {:.1}px; --ty: {:.1}px; width: {:.1}px; height: {:.1}px; background-color: {}; animation-delay: {:.3}s;",
                            p.dx, p.dy, p.size, p.size, p.color, p.delay_s
                        )}
                    />
                }) }
            }

            <div class="loader-logo">
                <div class="loader-icon">
                    <svg width="52" height="76" viewBox="0 0 52 76" fill="none">
                        <polygon points="34,0 10,36 24,36 18,76 42,30 28,30" fill="white" />
                    </svg>
                    if sparking {
                        { for ["top-right", "top-left", "bottom-right", "bottom-left"].iter().enumerate().map(|(i, corner)| html! {
                            <div
                                class={classes!("loader-spark", *corner)}
                                style={format!(
                                    "background-color: {}; animation-delay: {:.2}s;",
                                    if i % 2 == 0 { "#43e8d8" } else { "#ff6584" },
                                    i as f64 * 0.05
                                )}
                            />
                        }) }
                    }
                </div>
                <div class="loader-brand">
                    <span class="loader-wordmark">{ config::BRAND_NAME }</span>
                    <div class="loader-dots">
                        { for (0..3).map(|i| html! {
                            <div class="loader-dot" style={format!("animation-delay: {:.2}s;", i as f64 * 0.15)} />
                        }) }
                    </div>
                </div>
            </div>

            <div class="loader-shadow" />

            <style>
                {r#"
                    .page-loader {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #0a0a0f;
                        overflow: hidden;
                        transition: opacity 0.4s ease-in-out, transform 0.4s ease-in-out;
                    }
                    .page-loader.phase-exit {
                        opacity: 0;
                        transform: scale(1.04);
                    }
                    .loader-ring {
                        position: absolute;
                        border-radius: 50%;
                        border: 1px solid rgba(108, 99, 255, 0.2);
                        animation: ringPulse 0.8s ease-in-out infinite alternate;
                    }
                    .phase-burst .loader-ring {
                        animation: ringBurst 0.5s ease-out forwards;
                    }
                    @keyframes ringPulse {
                        from { transform: scale(0.95); opacity: 0.2; }
                        to { transform: scale(1.05); opacity: 0.5; }
                    }
                    @keyframes ringBurst {
                        from { transform: scale(1); opacity: 0.6; }
                        to { transform: scale(2.5); opacity: 0; }
                    }
                    .loader-shockwave {
                        position: absolute;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(108,99,255,0.35) 0%, transparent 70%);
                        animation: shockwave 0.55s ease-out forwards;
                    }
                    @keyframes shockwave {
                        from { width: 100px; height: 100px; opacity: 1; }
                        to { width: 700px; height: 700px; opacity: 0; }
                    }
                    .loader-burst {
                        position: absolute;
                        border-radius: 50%;
                        animation: burstOut 0.6s ease-out forwards;
                    }
                    @keyframes burstOut {
                        from { transform: translate(0, 0) scale(1); opacity: 1; }
                        to { transform: translate(var(--tx), var(--ty)) scale(0); opacity: 0; }
                    }
                    .loader-logo {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        animation: logoSlam 0.3s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    }
                    .phase-shake .loader-logo {
                        animation: logoShake 0.4s ease-in-out;
                    }
                    .phase-burst .loader-logo {
                        transform: scale(1.15);
                        transition: transform 0.15s;
                    }
                    @keyframes logoSlam {
                        from { transform: translateY(-120px) scale(0.4) rotate(-8deg); opacity: 0; }
                        to { transform: none; opacity: 1; }
                    }
                    @keyframes logoShake {
                        0% { transform: translateX(0) rotate(0) scale(1); }
                        15% { transform: translateX(-8px) rotate(-6deg) scale(1.08); }
                        30% { transform: translateX(8px) rotate(6deg) scale(0.96); }
                        45% { transform: translateX(-6px) rotate(-4deg) scale(1.06); }
                        60% { transform: translateX(6px) rotate(4deg) scale(0.98); }
                        80% { transform: translateX(-3px) rotate(-2deg) scale(1.03); }
                        100% { transform: translateX(0) rotate(0) scale(1); }
                    }
                    .loader-icon {
                        position: relative;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #6c63ff 0%, #43e8d8 100%);
                        box-shadow: 0 0 30px rgba(108,99,255,0.4);
                    }
                    .phase-shake .loader-icon,
                    .phase-burst .loader-icon {
                        box-shadow: 0 0 60px rgba(108,99,255,0.9), 0 0 120px rgba(67,232,216,0.5);
                    }
                    .loader-spark {
                        position: absolute;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        animation: spark 0.35s ease-out both;
                    }
                    .loader-spark.top-right { top: -0.5rem; right: -0.5rem; }
                    .loader-spark.top-left { top: -0.5rem; left: -0.5rem; }
                    .loader-spark.bottom-right { bottom: -0.5rem; right: -0.5rem; }
                    .loader-spark.bottom-left { bottom: -0.5rem; left: -0.5rem; }
                    @keyframes spark {
                        0% { transform: scale(0); opacity: 0; }
                        50% { transform: scale(1.5); opacity: 1; }
                        100% { transform: scale(0); opacity: 0; }
                    }
                    .loader-brand {
                        text-align: center;
                        animation: fadeUp 0.3s ease-out 0.2s both;
                    }
                    .loader-wordmark {
                        font-size: 1.875rem;
                        font-weight: 900;
                        letter-spacing: -0.025em;
                        background: linear-gradient(90deg, #fff 0%, #8b83ff 50%, #43e8d8 100%);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .loader-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.375rem;
                        margin-top: 0.25rem;
                    }
                    .loader-dot {
                        width: 0.375rem;
                        height: 0.375rem;
                        border-radius: 50%;
                        background: #6c63ff;
                        animation: dotPulse 0.6s ease-in-out infinite;
                    }
                    @keyframes dotPulse {
                        0%, 100% { transform: scale(1); opacity: 0.5; }
                        50% { transform: scale(1.8); opacity: 1; }
                    }
                    .loader-shadow {
                        position: absolute;
                        top: calc(50% + 70px);
                        width: 120px;
                        height: 20px;
                        border-radius: 50%;
                        background: rgba(108, 99, 255, 0.2);
                        filter: blur(24px);
                        opacity: 0.8;
                        transition: opacity 0.4s;
                    }
                    .phase-burst .loader-shadow,
                    .phase-exit .loader-shadow {
                        opacity: 0;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_spokes_cover_the_circle() {
        let particles = burst_particles(&mut StdRng::seed_from_u64(2));
        assert_eq!(particles.len(), 24);
        for (i, p) in particles.iter().enumerate() {
            let distance = p.dx.hypot(p.dy);
            assert!((80.0..200.0).contains(&distance), "spoke {i} reached {distance}");
            assert!((3.0..8.0).contains(&p.size));
            assert!((0.0..0.1).contains(&p.delay_s));
            assert_eq!(p.color, BURST_COLORS[i % 3]);
        }
        // the first spoke points straight right
        assert!(particles[0].dy.abs() < 1e-9 && particles[0].dx > 0.0);
    }
}
