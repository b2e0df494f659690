//! Drifting point graph behind the hero section.
//!
//! Nodes move in straight lines and reflect off the canvas edges. Edges are
//! picked once at construction and never change, so a pair of far-apart
//! nodes can stay linked across the whole screen.

use crate::config::NetworkParams;
use crate::random::RandomSource;

pub const NODE_COLOR: &str = "rgba(100, 200, 255, 0.6)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Node {
    /// Advances one frame and reflects the velocity on any axis that left
    /// `[0, width] x [0, height]`. The position is not pulled back in.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

impl Connection {
    pub fn stroke_style(&self) -> String {
        format!("rgba(100, 200, 255, {})", self.opacity)
    }
}

#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    width: f64,
    height: f64,
}

impl NeuralNetwork {
    pub fn new(width: f64, height: f64, params: &NetworkParams, rng: &mut impl RandomSource) -> Self {
        let nodes = (0..params.node_count)
            .map(|_| Node {
                x: rng.next_f64() * width,
                y: rng.next_f64() * height,
                vx: (rng.next_f64() - 0.5) * params.max_speed,
                vy: (rng.next_f64() - 0.5) * params.max_speed,
            })
            .collect::<Vec<_>>();

        let cutoff = 1.0 - params.connection_probability;
        let mut connections = Vec::new();
        for from in 0..nodes.len() {
            for to in from + 1..nodes.len() {
                if rng.next_f64() > cutoff {
                    connections.push(Connection {
                        from,
                        to,
                        opacity: rng.next_f64() * params.max_connection_opacity,
                    });
                }
            }
        }

        Self {
            nodes,
            connections,
            width,
            height,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        self.nodes.iter_mut().for_each(|n| n.step(w, h));
    }

    /// Endpoints of a connection in canvas coordinates.
    pub fn segment(&self, conn: &Connection) -> ((f64, f64), (f64, f64)) {
        let a = &self.nodes[conn.from];
        let b = &self.nodes[conn.to];
        ((a.x, a.y), (b.x, b.y))
    }
}
